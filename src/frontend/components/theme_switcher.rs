use leptos::prelude::*;

use taskboard::board::TaskStore;

use crate::theme::{apply_dark_mode, save_dark_mode};

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let store = expect_context::<RwSignal<TaskStore>>();

    let is_dark = move || store.with(|s| s.dark_mode());

    let toggle = move |_| {
        let on = !store.with_untracked(|s| s.dark_mode());
        store.update(|s| s.set_dark_mode(on));
        save_dark_mode(on);
        apply_dark_mode(on);
    };

    view! {
        <button
            class="rounded-full bg-gray-200 px-4 py-2 text-sm font-medium transition-colors hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600"
            on:click=toggle
            title=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
        >
            {move || if is_dark() { "☀️ Light" } else { "🌙 Dark" }}
        </button>
    }
}
