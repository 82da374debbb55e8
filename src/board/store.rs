//! The client state store: one ordered task list plus transient view state.

use crate::model::{Task, TaskStatus};

/// In-memory mirror of the loaded tasks and the transient UI state.
///
/// This is the exclusive mutation surface for task data on the client: the
/// view never edits a task in place, it asks the store. Every operation is
/// a total, synchronous update of the in-memory structure; validation (if
/// any) happened at the API boundary before the operation was invoked, and
/// the store itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter_category: String,
    search_query: String,
    dark_mode: bool,
    editing_task: Option<Task>,
}

/// Completion tally derived from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub completed: usize,
    pub total: usize,
}

impl Completion {
    /// Fraction of tasks completed, `0` for an empty board.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the dark-mode flag restored from durable client storage.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter_category(&self) -> &str {
        &self.filter_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn editing_task(&self) -> Option<&Task> {
        self.editing_task.as_ref()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Overwrite the whole task list. Used once per session after the
    /// initial list-all fetch; no merge with prior state.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append a freshly created task. Silent no-op if the id is already
    /// present; the caller is responsible for id freshness.
    pub fn insert(&mut self, task: Task) {
        if self.tasks.iter().any(|t| t.id == task.id) {
            return;
        }
        self.tasks.push(task);
    }

    /// Replace the entry with a matching id, all fields at once, keeping
    /// its position in the list. No-op if no entry matches.
    pub fn replace(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    /// Delete the entry with the given id. No-op if absent.
    pub fn remove(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn set_filter_category(&mut self, text: impl Into<String>) {
        self.filter_category = text.into();
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
    }

    pub fn set_editing_task(&mut self, task: Option<Task>) {
        self.editing_task = task;
    }

    // ------------------------------------------------------------------
    // Derived views (recomputed on demand, never stored)
    // ------------------------------------------------------------------

    /// Tasks passing both the category filter and the title search.
    ///
    /// Both predicates are case-insensitive substring matches; an empty
    /// filter or query matches everything.
    pub fn filtered(&self) -> Vec<&Task> {
        let category = self.filter_category.to_lowercase();
        let query = self.search_query.to_lowercase();

        self.tasks
            .iter()
            .filter(|t| {
                (category.is_empty() || t.category.to_lowercase().contains(&category))
                    && (query.is_empty() || t.title.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// The filtered subset shown in one board column.
    ///
    /// Drag indices are resolved against this view, not the full list:
    /// positions must match what the user actually sees.
    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        self.filtered()
            .into_iter()
            .filter(|t| t.status == status)
            .collect()
    }

    /// Completion tally over all loaded tasks (ignores filters).
    pub fn completion(&self) -> Completion {
        Completion {
            completed: self
                .tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            total: self.tasks.len(),
        }
    }
}
