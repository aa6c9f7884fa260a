//! In-memory todo store.
//!
//! # Overview
//! Owns an ordered sequence of `Todo` records and implements list, get,
//! create, update and delete over it. There is no I/O here: the HTTP adapter
//! in the `todo-server` crate wraps a `TodoStore` in a lock and calls into it
//! from its handlers.
//!
//! # Design
//! - `TodoStore` is a plain owned value. Whoever holds it decides how it is
//!   shared; nothing in this crate is global.
//! - Timestamps come from a `Clock` so tests can pin time with `ManualClock`.
//! - Lookups are linear scans by id. The backing `Vec` keeps insertion order.

pub mod clock;
pub mod error;
pub mod store;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
pub use store::{TodoStore, SEED_TASK};
pub use types::Todo;
