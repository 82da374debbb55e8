use leptos::prelude::*;
use leptos::task::spawn_local;

use taskboard::board::{DragResult, TaskStore};
use taskboard::model::{Task, TaskStatus};

use crate::app::{BoardLifecycle, FormFields};

/// Three-column board with native HTML drag and drop.
///
/// The drag source is tracked as (status, index within the visible
/// column), matching what the user grabbed on a filtered board. A drag
/// that ends outside any column just clears the source.
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let drag_source = RwSignal::new(None::<(TaskStatus, usize)>);

    view! {
        <div class="mb-6 grid grid-cols-1 gap-4 md:grid-cols-3">
            {TaskStatus::ALL
                .into_iter()
                .map(|status| view! { <KanbanColumn status=status drag_source=drag_source /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn KanbanColumn(
    status: TaskStatus,
    drag_source: RwSignal<Option<(TaskStatus, usize)>>,
) -> impl IntoView {
    let store = expect_context::<RwSignal<TaskStore>>();
    let lifecycle = expect_context::<BoardLifecycle>();

    let tasks = move || {
        store.with(|s| {
            s.column(status)
                .into_iter()
                .cloned()
                .collect::<Vec<Task>>()
        })
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();

        let Some((source_status, source_index)) = drag_source.get_untracked() else {
            return;
        };
        drag_source.set(None);

        let lifecycle = lifecycle.clone();
        spawn_local(async move {
            let drag = DragResult {
                source_status,
                source_index,
                destination: Some(status),
            };
            if let Err(e) = lifecycle.move_task(drag).await {
                leptos::logging::error!("failed to move task: {e}");
            }
        });
    };

    view! {
        <div
            class="rounded-lg bg-white p-4 shadow dark:bg-gray-800"
            on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <h2 class="mb-3 font-semibold">
                {status.as_str()} " (" {move || tasks().len()} ")"
            </h2>
            <div class="flex flex-col gap-2">
                <For
                    each=tasks
                    key=|task| task.id
                    children=move |task| {
                        let id = task.id;
                        let index = move || {
                            store.with(|s| s.column(status).iter().position(|t| t.id == id))
                        };
                        view! {
                            <TaskCard
                                task=task
                                on_dragstart=move || {
                                    if let Some(i) = index() {
                                        drag_source.set(Some((status, i)));
                                    }
                                }
                                on_dragend=move || drag_source.set(None)
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn TaskCard(
    task: Task,
    on_dragstart: impl Fn() + 'static,
    on_dragend: impl Fn() + 'static,
) -> impl IntoView {
    let lifecycle = expect_context::<BoardLifecycle>();
    let fields = expect_context::<FormFields>();

    let due = task.due_date.map(|d| d.to_string());
    let edit_task = task.clone();
    let task_id = task.id;

    let on_edit = move |_| {
        let form = lifecycle.begin_edit(&edit_task);
        fields.fill(&form);
    };

    let delete_lifecycle = expect_context::<BoardLifecycle>();
    let on_delete = move |_| {
        let lifecycle = delete_lifecycle.clone();
        spawn_local(async move {
            if let Err(e) = lifecycle.remove(task_id).await {
                leptos::logging::error!("failed to delete task: {e}");
            }
        });
    };

    view! {
        <div
            class="cursor-grab rounded border border-gray-200 bg-gray-50 p-3 active:cursor-grabbing dark:border-gray-600 dark:bg-gray-700"
            draggable="true"
            on:dragstart=move |_| on_dragstart()
            on:dragend=move |_| on_dragend()
        >
            <div class="font-medium">{task.title.clone()}</div>
            <div class="text-sm text-gray-500 dark:text-gray-400">{task.category.clone()}</div>
            {due.map(|d| {
                view! {
                    <div class="text-xs text-gray-400 dark:text-gray-500">"Due: " {d}</div>
                }
            })}
            <div class="mt-2 flex gap-2 text-sm">
                <button class="text-blue-600 hover:underline dark:text-blue-400" on:click=on_edit>
                    "Edit"
                </button>
                <button class="text-red-600 hover:underline dark:text-red-400" on:click=on_delete>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
