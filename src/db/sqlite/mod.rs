//! SQLite implementation of the database traits.

mod connection;
mod task;

#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod task_test;

pub use connection::SqliteDatabase;
pub use task::SqliteTaskRepository;
