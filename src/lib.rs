//! taskboard: a small kanban-style task manager.
//!
//! The crate is split in two feature-gated halves sharing one wire model:
//!
//! - `backend` (default): axum HTTP API backed by SQLite (`api`, `db`)
//! - `frontend`: Leptos CSR single-page app compiled to WASM
//!
//! The `board` module is the always-compiled core: the client-side state
//! store and the task lifecycle coordinator, written without any DOM or
//! network dependency so they can be tested natively.

#[cfg(feature = "backend")]
pub mod api;
pub mod board;
#[cfg(feature = "backend")]
pub mod db;
pub mod model;

#[cfg(test)]
mod model_test;
