//! Request and response bodies that are not plain `Todo` records.

use serde::{Deserialize, Serialize};

/// Body of `POST /todos`. A missing or null `task` deserializes to `None`
/// and is rejected by the store like an empty one.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub task: Option<String>,
}

/// Body of `PATCH /todos/{id}`. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub task: String,
    pub is_done: bool,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}
