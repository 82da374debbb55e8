use leptos::prelude::*;

use taskboard::board::TaskStore;

/// Completion bar over every task, regardless of active filters.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = expect_context::<RwSignal<TaskStore>>();

    let completion = move || store.with(|s| s.completion());

    view! {
        <div class="mb-6">
            <div class="mb-1 flex justify-between text-sm">
                <span>
                    {move || {
                        let c = completion();
                        format!("{}/{} Tasks Completed", c.completed, c.total)
                    }}
                </span>
                <span>{move || format!("{:.0}%", completion().percent())}</span>
            </div>
            <div class="h-3 w-full overflow-hidden rounded-full bg-gray-300 dark:bg-gray-700">
                <div
                    class="h-full rounded-full bg-green-500 transition-all duration-300"
                    style:width=move || format!("{}%", completion().percent())
                ></div>
            </div>
        </div>
    }
}
