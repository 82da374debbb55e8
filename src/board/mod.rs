//! Client-side board core: state store and lifecycle coordination.
//!
//! This module is the model behind the UI. `TaskStore` is the single
//! in-memory mirror of the loaded tasks plus the transient view state;
//! `Lifecycle` translates user intents (submit, drag, edit, delete) into
//! persistence calls followed by exactly one store mutation on success.
//!
//! Nothing here touches the DOM or the network directly: persistence goes
//! through the `TaskService` trait and shared state through `StateCell`,
//! so the whole module runs under plain `cargo test`.

mod lifecycle;
mod service;
mod store;


pub use lifecycle::{DragResult, Lifecycle, StateCell, TaskForm};
pub use service::{ServiceError, TaskService};
pub use store::{Completion, TaskStore};
