//! Route handlers.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/` | greeting |
//! | `GET` | `/todos` | all records, insertion order |
//! | `GET` | `/todos/{id}` | one record |
//! | `POST` | `/todos` | created record |
//! | `PATCH` | `/todos/{id}` | updated record |
//! | `DELETE` | `/todos/{id}` | deleted record |
//!
//! All successes are 200. Failures go through `ApiError`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, info, warn};

use crate::dto::{CreateTodo, Message, UpdateTodo};
use crate::error::ApiError;
use crate::{SharedStore, Todo};

pub async fn root() -> Json<Message> {
    Json(Message {
        message: "Hello FastAPI".to_string(),
    })
}

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let store = store.read().await;
    debug!(count = store.len(), "listing todos");
    Json(store.list().to_vec())
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let store = store.read().await;
    let todo = store.get(&id).inspect_err(|_| debug!(%id, "todo not found"))?;
    Ok(Json(todo.clone()))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload.inspect_err(|e| warn!(error = %e, "rejected create body"))?;
    let task = input.task.unwrap_or_default();

    let todo = store
        .write()
        .await
        .create(&task)
        .inspect_err(|e| warn!(error = %e, "rejected create"))?;
    info!(id = %todo.id, "todo created");
    Ok(Json(todo))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload.inspect_err(|e| warn!(error = %e, "rejected update body"))?;

    let todo = store
        .write()
        .await
        .update(&id, input.task, input.is_done)
        .inspect_err(|_| debug!(%id, "todo not found"))?;
    debug!(id = %todo.id, is_done = todo.is_done, "todo updated");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store
        .write()
        .await
        .delete(&id)
        .inspect_err(|_| debug!(%id, "todo not found"))?;
    info!(id = %todo.id, "todo deleted");
    Ok(Json(todo))
}
