//! Persisted row shapes.

use chrono::NaiveDate;

use crate::model::{Task, TaskStatus};

/// A task row as stored, including the server-managed timestamps that
/// never travel through the board model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Task {
            id: record.id,
            title: record.title,
            category: record.category,
            status: record.status,
            due_date: record.due_date,
        }
    }
}
