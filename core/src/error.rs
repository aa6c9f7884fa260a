//! Error types for store operations.
//!
//! # Design
//! Two failure modes only. `InvalidArgument` covers empty required input and
//! `NotFound` covers an id that matches no live record. The HTTP adapter maps
//! them to 400 and 404.

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A required input was missing or empty.
    #[error("{0}")]
    InvalidArgument(String),

    /// No record with the given id exists.
    #[error("{0}")]
    NotFound(String),
}

impl StoreError {
    pub(crate) fn missing_task() -> Self {
        StoreError::InvalidArgument("No task was set".to_string())
    }

    pub(crate) fn unknown_id() -> Self {
        StoreError::NotFound("No such todo with this ID".to_string())
    }
}
