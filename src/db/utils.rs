//! Database utility functions.

use chrono::Utc;

/// Mint a task id from the current time in epoch milliseconds.
///
/// Matches the ids clients mint for themselves, so server-assigned and
/// client-assigned ids stay interchangeable.
pub fn generate_task_id() -> i64 {
    Utc::now().timestamp_millis()
}

/// Get the current datetime as a string in SQLite format.
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
