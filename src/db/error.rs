//! Database error types.
//!
//! Storage-backend agnostic errors, using miette for fancy diagnostic
//! output and thiserror for the derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Task not found: id '{id}'")]
    #[diagnostic(code(taskboard::db::not_found))]
    NotFound { id: i64 },

    #[error("Task already exists: id '{id}'")]
    #[diagnostic(code(taskboard::db::already_exists))]
    AlreadyExists { id: i64 },

    #[error("Validation error: {message}")]
    #[diagnostic(code(taskboard::db::validation_error))]
    Validation { message: String },

    #[error("Invalid data: {message} (hint: {help})")]
    #[diagnostic(code(taskboard::db::invalid_data))]
    InvalidData { message: String, help: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(taskboard::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(taskboard::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(taskboard::db::connection_error))]
    Connection { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
