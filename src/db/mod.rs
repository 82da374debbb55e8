//! Database abstraction layer.
//!
//! Trait-based data access so the HTTP layer never sees a concrete
//! storage backend.
//!
//! - `error`: storage-agnostic error types
//! - `models`: persisted row shapes
//! - `repository`: trait definitions for data access
//! - `sqlite`: the SQLite implementation

mod error;
mod models;
mod repository;
pub mod sqlite;
pub mod utils;

pub use error::{DbError, DbResult};
pub use models::TaskRecord;
pub use repository::{Database, TaskRepository};
