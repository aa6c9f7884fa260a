//! The todo store: an ordered, in-memory sequence of records.
//!
//! # Design
//! `TodoStore` holds a `Vec<Todo>` and a shared `Clock`. All lookups are
//! linear scans by id, and deletion uses `Vec::remove` so the remaining
//! records keep their relative order. Methods take `&self` / `&mut self` and
//! never lock; callers that share a store across threads wrap it themselves.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::clock::Clock;
use crate::error::StoreError;
use crate::types::Todo;

/// Task text of the record every seeded store starts with.
pub const SEED_TASK: &str = "Some task to be done";

pub struct TodoStore {
    todos: Vec<Todo>,
    clock: Arc<dyn Clock>,
}

impl TodoStore {
    /// Empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            todos: Vec::new(),
            clock,
        }
    }

    /// Store holding the single example record the service starts with.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let mut store = Self::new(clock);
        let now = store.clock.now_millis();
        store.todos.push(Todo {
            id: Uuid::new_v4().to_string(),
            task: SEED_TASK.to_string(),
            is_done: false,
            created_at: now,
            updated_at: now,
        });
        store
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&Todo, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or_else(StoreError::unknown_id)
    }

    /// Append a new record. Fails with `InvalidArgument` when `task` is empty,
    /// in which case the store is left untouched.
    pub fn create(&mut self, task: &str) -> Result<Todo, StoreError> {
        if task.is_empty() {
            return Err(StoreError::missing_task());
        }

        let now = self.clock.now_millis();
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            task: task.to_string(),
            is_done: false,
            created_at: now,
            updated_at: now,
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Overwrite `task` and `is_done` on an existing record and refresh its
    /// `updated_at`. An empty `task` is accepted here, unlike `create`.
    pub fn update(&mut self, id: &str, task: String, is_done: bool) -> Result<Todo, StoreError> {
        let now = self.clock.now_millis();
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(StoreError::unknown_id)?;

        todo.task = task;
        todo.is_done = is_done;
        // Never step backwards, even if the clock does.
        todo.updated_at = todo.updated_at.max(now);
        Ok(todo.clone())
    }

    /// Remove a record and return it as it was just before removal.
    pub fn delete(&mut self, id: &str) -> Result<Todo, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(StoreError::unknown_id)?;
        Ok(self.todos.remove(index))
    }
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .finish_non_exhaustive()
    }
}
