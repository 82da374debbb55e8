//! The task lifecycle coordinator: intents in, persistence + one mutation out.

use chrono::NaiveDate;

use super::service::{ServiceError, TaskService};
use super::store::TaskStore;
use crate::model::{Task, TaskStatus};

/// Shared cell holding the one `TaskStore` instance.
///
/// The coordinator is agnostic of how the store is shared: the frontend
/// backs this with a Leptos `RwSignal`, tests with `Rc<RefCell<_>>`. Each
/// `with`/`update` call is atomic with respect to the single-threaded
/// scheduler; no operation is observable half-applied.
pub trait StateCell {
    fn with<R>(&self, f: impl FnOnce(&TaskStore) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut TaskStore));
}

#[cfg(feature = "frontend")]
mod signal_cell {
    use leptos::prelude::{RwSignal, Update, WithUntracked};

    use super::{StateCell, TaskStore};

    // Reads here happen inside intent handlers, not render closures, so
    // they must not register reactive subscriptions. Updates go through
    // the signal and trigger a re-render as usual.
    impl StateCell for RwSignal<TaskStore> {
        fn with<R>(&self, f: impl FnOnce(&TaskStore) -> R) -> R {
            self.with_untracked(f)
        }

        fn update(&self, f: impl FnOnce(&mut TaskStore)) {
            Update::update(self, f)
        }
    }
}

/// The four editable fields as the form holds them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub title: String,
    pub category: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
}

impl From<&Task> for TaskForm {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            category: task.category.clone(),
            status: task.status,
            due_date: task.due_date,
        }
    }
}

/// Outcome of a drag gesture as the view reports it.
///
/// `source_index` is the position within the *visible* (filtered) source
/// column. `destination` is `None` when the drag was cancelled or dropped
/// outside any column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResult {
    pub source_status: TaskStatus,
    pub source_index: usize,
    pub destination: Option<TaskStatus>,
}

/// Coordinates user intents against the remote store and the state cell.
///
/// Every mutating intent awaits the persistence call to completion before
/// touching client state. The UI is deliberately not optimistic: a failed
/// remote call leaves the store exactly as it was, and the caller decides
/// how to surface the error. There are no retries and no conflict
/// detection; concurrent edits of the same task are last-response-wins.
#[derive(Clone)]
pub struct Lifecycle<C, S> {
    cell: C,
    service: S,
}

impl<C: StateCell, S: TaskService> Lifecycle<C, S> {
    pub fn new(cell: C, service: S) -> Self {
        Self { cell, service }
    }

    /// Initial load: fetch everything and overwrite the store.
    pub async fn load(&self) -> Result<(), ServiceError> {
        let tasks = self.service.list().await?;
        self.cell.update(|store| store.replace_all(tasks));
        Ok(())
    }

    /// Form submission: update the task under edit, or create a new one.
    ///
    /// With an editing marker set, the form's fields are merged into the
    /// marked task's id and persisted as a full replace; on success the
    /// marker is cleared. Otherwise a fresh id is minted and the task is
    /// created. The view resets its inputs only when this returns `Ok`,
    /// so a failed submission keeps the user's input for a retry.
    pub async fn submit(&self, form: TaskForm) -> Result<(), ServiceError> {
        let editing = self.cell.with(|store| store.editing_task().cloned());

        match editing {
            Some(original) => {
                let updated = Task {
                    id: original.id,
                    title: form.title,
                    category: form.category,
                    status: form.status,
                    due_date: form.due_date,
                };
                let stored = self.service.replace(&updated).await?;
                self.cell.update(|store| {
                    store.replace(stored);
                    store.set_editing_task(None);
                });
            }
            None => {
                let task = Task {
                    id: mint_task_id(),
                    title: form.title,
                    category: form.category,
                    status: form.status,
                    due_date: form.due_date,
                };
                let stored = self.service.create(&task).await?;
                self.cell.update(|store| store.insert(stored));
            }
        }

        Ok(())
    }

    /// Drag-and-drop move: change only the status of the dragged task.
    ///
    /// A drag without a destination is a complete no-op: no persistence
    /// call, no state change. The source index is resolved against the
    /// filtered column so it matches what the user saw when dragging.
    /// Returns whether a move was persisted.
    pub async fn move_task(&self, drag: DragResult) -> Result<bool, ServiceError> {
        let Some(destination) = drag.destination else {
            return Ok(false);
        };

        let picked = self.cell.with(|store| {
            store
                .column(drag.source_status)
                .get(drag.source_index)
                .map(|t| (*t).clone())
        });
        let Some(task) = picked else {
            // Stale index, e.g. the column changed under the drag.
            return Ok(false);
        };

        let moved = Task {
            status: destination,
            ..task
        };
        let stored = self.service.replace(&moved).await?;
        self.cell.update(|store| store.replace(stored));
        Ok(true)
    }

    /// Delete intent: persist first, then drop the entry from the store.
    pub async fn remove(&self, id: i64) -> Result<(), ServiceError> {
        self.service.delete(id).await?;
        self.cell.update(|store| store.remove(id));
        Ok(())
    }

    /// Edit intent: mark the task as being edited and hand back its fields
    /// for the form to prefill. No persistence side effect.
    pub fn begin_edit(&self, task: &Task) -> TaskForm {
        self.cell
            .update(|store| store.set_editing_task(Some(task.clone())));
        TaskForm::from(task)
    }
}

/// Mint a task id from the current time in epoch milliseconds.
///
/// This mirrors what the server does for clients that omit an id. Two
/// clients creating within the same millisecond would collide; the store's
/// uniqueness constraint turns that into a rejected create rather than a
/// silent overwrite.
#[cfg(all(target_arch = "wasm32", feature = "frontend"))]
fn mint_task_id() -> i64 {
    web_sys::js_sys::Date::now() as i64
}

#[cfg(not(all(target_arch = "wasm32", feature = "frontend")))]
fn mint_task_id() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
