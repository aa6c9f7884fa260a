//! Domain types for the todo store.
//!
//! The serialized field names are part of the HTTP contract, so `Todo` is
//! returned by the server as-is without a separate response DTO.

use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// `id` and `created_at` never change after creation. `updated_at` starts
/// equal to `created_at` and only moves forward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub task: String,
    pub is_done: bool,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
}
