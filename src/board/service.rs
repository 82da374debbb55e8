//! Persistence seam for the board: the four remote task operations.

use thiserror::Error;

use crate::model::Task;

/// Error from the remote persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected request ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// The four persistence calls the board issues.
///
/// Implemented over HTTP by the frontend API client and by in-memory fakes
/// in tests. Futures are not required to be `Send`: the board runs on one
/// logical thread (the browser main thread, or a current-thread test
/// runtime).
#[allow(async_fn_in_trait)]
pub trait TaskService {
    /// Fetch the full task list (no pagination).
    async fn list(&self) -> Result<Vec<Task>, ServiceError>;

    /// Persist a new task; the server echoes the stored record.
    async fn create(&self, task: &Task) -> Result<Task, ServiceError>;

    /// Replace the task with the same id; all mutable fields at once.
    async fn replace(&self, task: &Task) -> Result<Task, ServiceError>;

    /// Delete by id.
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}
