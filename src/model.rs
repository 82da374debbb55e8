//! Shared wire model for tasks.
//!
//! These types are serialized the same way on both sides of the HTTP
//! boundary: the backend persists and echoes them, the frontend keeps them
//! in the board store. Field names follow the JSON wire format (`dueDate`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of a task. Exactly three states, each bound to a board column.
///
/// The wire representation uses the human-readable literals; any other
/// string is rejected when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// All statuses in board-column order.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a status literal fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task status '{0}'")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "To Do" => Ok(TaskStatus::ToDo),
            "In Progress" => Ok(TaskStatus::InProgress),
            "Completed" => Ok(TaskStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A single task as both sides of the wire see it.
///
/// `id` is minted by whoever creates the task (epoch milliseconds) and is
/// immutable afterwards. `due_date` carries no time of day; the calendar
/// shows it as a one-day event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}
