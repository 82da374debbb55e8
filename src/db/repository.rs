//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer. The
//! methods return named `impl Future + Send` so generic axum handlers
//! stay `Send` without boxing.

use std::future::Future;

use crate::db::{DbResult, models::TaskRecord};
use crate::model::Task;

/// Repository for task operations.
pub trait TaskRepository {
    /// Get all tasks, oldest first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<TaskRecord>>> + Send;

    /// Create a new task. An id of 0 means "mint one for me".
    fn create(&self, task: &Task) -> impl Future<Output = DbResult<TaskRecord>> + Send;

    /// Replace an existing task wholesale, keyed by its id.
    fn replace(&self, task: &Task) -> impl Future<Output = DbResult<TaskRecord>> + Send;

    /// Delete a task by id. Deleting an absent id is not an error.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Repositories are handed out via a generic associated type, avoiding
/// dynamic dispatch.
pub trait Database: Send + Sync {
    type Tasks<'a>: TaskRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the task repository.
    fn tasks(&self) -> Self::Tasks<'_>;
}
