use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use taskboard::board::TaskStore;

/// Category and title filters. Both are case-insensitive substring
/// matches; the title search is debounced so the board does not churn
/// on every keystroke.
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = expect_context::<RwSignal<TaskStore>>();

    // Local echo of the search box so typing stays responsive while the
    // store only updates after the debounce.
    let search_input = RwSignal::new(String::new());
    let debounce_timeout = RwSignal::new(None::<i32>);

    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        search_input.set(value.clone());

        if let Some(timeout_id) = debounce_timeout.get_untracked() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let callback = Closure::once(move || {
            store.update(|s| s.set_search_query(value));
            debounce_timeout.set(None);
        });

        if let Some(window) = web_sys::window() {
            if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                300,
            ) {
                debounce_timeout.set(Some(timeout_id));
            }
        }
        callback.forget();
    };

    view! {
        <div class="mb-6 grid grid-cols-1 gap-3 sm:grid-cols-2">
            <input
                type="text"
                placeholder="Filter by category..."
                class="rounded border border-gray-300 px-3 py-2 dark:border-gray-600 dark:bg-gray-700"
                prop:value=move || store.with(|s| s.filter_category().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store.update(|s| s.set_filter_category(value));
                }
            />
            <input
                type="text"
                placeholder="Search tasks..."
                class="rounded border border-gray-300 px-3 py-2 dark:border-gray-600 dark:bg-gray-700"
                prop:value=move || search_input.get()
                on:input=on_search_input
            />
        </div>
    }
}
