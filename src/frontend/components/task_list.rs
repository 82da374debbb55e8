use leptos::prelude::*;
use leptos::task::spawn_local;

use taskboard::board::TaskStore;
use taskboard::model::Task;

use crate::app::{BoardLifecycle, FormFields};

/// Flat list of the visible tasks, with edit and delete actions.
#[component]
pub fn TaskListView() -> impl IntoView {
    let store = expect_context::<RwSignal<TaskStore>>();

    let tasks = move || {
        store.with(|s| s.filtered().into_iter().cloned().collect::<Vec<Task>>())
    };

    view! {
        <div class="mb-6 rounded-lg bg-white p-4 shadow dark:bg-gray-800">
            <h2 class="mb-3 font-semibold">"All Tasks"</h2>
            <Show
                when=move || !tasks().is_empty()
                fallback=|| {
                    view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">"No tasks found"</p>
                    }
                }
            >
                <ul class="divide-y divide-gray-200 dark:divide-gray-600">
                    <For each=tasks key=|task| task.id children=|task| view! { <TaskRow task=task /> } />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let lifecycle = expect_context::<BoardLifecycle>();
    let fields = expect_context::<FormFields>();

    let task_id = task.id;
    let edit_task = task.clone();

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
        <li class="flex items-center justify-between py-2">
            <div>
                <span class="font-medium">{task.title.clone()}</span>
                <span class="ml-2 text-sm text-gray-500 dark:text-gray-400">
                    {task.category.clone()} " · " {task.status.as_str()}
                </span>
            </div>
            <div class="flex gap-2 text-sm">
                <button class="text-blue-600 hover:underline dark:text-blue-400" on:click=on_edit>
                    "Edit"
                </button>
                <button class="text-red-600 hover:underline dark:text-red-400" on:click=on_delete>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
