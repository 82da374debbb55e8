use leptos::prelude::*;
use leptos::task::spawn_local;

use taskboard::board::TaskStore;
use taskboard::model::TaskStatus;

use crate::app::{BoardLifecycle, FormFields};

/// Create/edit form. The same card serves both intents: when a task is
/// marked as being edited the submit replaces it, otherwise it creates.
///
/// Marking a task for editing also brings the card into view and gives
/// it an editing banner and highlight, so the prefill is not the only
/// visible reaction to the Edit button.
#[component]
pub fn TaskFormCard() -> impl IntoView {
    let store = expect_context::<RwSignal<TaskStore>>();
    let lifecycle = expect_context::<BoardLifecycle>();
    let fields = expect_context::<FormFields>();

    let editing = move || store.with(|s| s.editing_task().is_some());
    let editing_title = move || store.with(|s| s.editing_task().map(|t| t.title.clone()));

    // Scroll the form into view when a task is (newly) marked for edit.
    Effect::new(move |prev: Option<Option<i64>>| {
        let editing_id = store.with(|s| s.editing_task().map(|t| t.id));
        if editing_id.is_some() && prev.flatten() != editing_id {
            if let Some(form) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("task-form"))
            {
                form.scroll_into_view();
            }
        }
        editing_id
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = fields.to_form();
        if form.title.trim().is_empty() || form.category.trim().is_empty() {
            return;
        }

        let lifecycle = lifecycle.clone();
        spawn_local(async move {
            match lifecycle.submit(form).await {
                Ok(()) => fields.reset(),
                Err(e) => leptos::logging::error!("failed to save task: {e}"),
            }
        });
    };

    view! {
        <form
            id="task-form"
            class="mb-6 grid grid-cols-1 gap-3 rounded-lg bg-white p-4 shadow sm:grid-cols-2 lg:grid-cols-5 dark:bg-gray-800"
            class=("ring-2", editing)
            class=("ring-blue-500", editing)
            on:submit=on_submit
        >
            {move || {
                editing_title()
                    .map(|title| {
                        view! {
                            <div class="rounded bg-blue-50 px-3 py-2 text-sm text-blue-800 sm:col-span-2 lg:col-span-5 dark:bg-blue-900 dark:text-blue-200">
                                "Editing Task: " {title}
                            </div>
                        }
                    })
            }}
            <input
                type="text"
                placeholder="Task title"
                class="rounded border border-gray-300 px-3 py-2 dark:border-gray-600 dark:bg-gray-700"
                prop:value=move || fields.title.get()
                on:input=move |ev| fields.title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Category"
                class="rounded border border-gray-300 px-3 py-2 dark:border-gray-600 dark:bg-gray-700"
                prop:value=move || fields.category.get()
                on:input=move |ev| fields.category.set(event_target_value(&ev))
            />
            <select
                class="rounded border border-gray-300 px-3 py-2 dark:border-gray-600 dark:bg-gray-700"
                prop:value=move || fields.status.get().as_str().to_string()
                on:change=move |ev| {
                    if let Ok(status) = event_target_value(&ev).parse::<TaskStatus>() {
                        fields.status.set(status);
                    }
                }
            >
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! { <option value=status.as_str()>{status.as_str()}</option> }
                    })
                    .collect_view()}
            </select>
            <input
                type="date"
                class="rounded border border-gray-300 px-3 py-2 dark:border-gray-600 dark:bg-gray-700"
                prop:value=move || fields.due_date.get()
                on:input=move |ev| fields.due_date.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="rounded bg-blue-600 px-4 py-2 font-medium text-white hover:bg-blue-700"
            >
                {move || if editing() { "Update Task" } else { "Add Task" }}
            </button>
        </form>
    }
}
