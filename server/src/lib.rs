//! HTTP adapter for the in-memory todo store.
//!
//! # Overview
//! Exposes `todo_core::TodoStore` over JSON/HTTP with axum. Handlers decode
//! the request, lock the shared store, call the matching store operation and
//! encode either the record or an `ApiError`.
//!
//! # Design
//! - The store lives in a `SharedStore` (`Arc<RwLock<TodoStore>>`) handed to
//!   the router as state. Reads take the read lock, mutations the write lock.
//! - `app()` builds the production router; `app_with_store` lets tests and
//!   embedders supply their own store and clock.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;

use std::sync::Arc;

use axum::{routing::get, Router};
use todo_core::{SystemClock, TodoStore};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub use config::{load_dotenv, ConfigError, ServerConfig};
pub use error::ApiError;
pub use server::{bind, run, ServerError};
pub use todo_core::Todo;

pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Router over a freshly seeded store on the wall clock.
pub fn app() -> Router {
    app_with_store(TodoStore::seeded(Arc::new(SystemClock)))
}

pub fn app_with_store(store: TodoStore) -> Router {
    let store: SharedStore = Arc::new(RwLock::new(store));
    Router::new()
        .route("/", get(handlers::root))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
