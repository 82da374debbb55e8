//! Application shell: shared state, initial load and page layout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use taskboard::board::{Lifecycle, TaskForm, TaskStore};
use taskboard::model::TaskStatus;

use crate::api::HttpApi;
use crate::components::{
    CalendarView, FilterBar, KanbanBoard, ProgressBar, TaskFormCard, TaskListView, ThemeSwitcher,
};
use crate::theme;

/// The concrete coordinator the whole frontend shares.
pub type BoardLifecycle = Lifecycle<RwSignal<TaskStore>, HttpApi>;

/// Form input signals, shared so the edit buttons can prefill them.
#[derive(Clone, Copy)]
pub struct FormFields {
    pub title: RwSignal<String>,
    pub category: RwSignal<String>,
    pub status: RwSignal<TaskStatus>,
    pub due_date: RwSignal<String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            status: RwSignal::new(TaskStatus::ToDo),
            due_date: RwSignal::new(String::new()),
        }
    }

    pub fn fill(&self, form: &TaskForm) {
        self.title.set(form.title.clone());
        self.category.set(form.category.clone());
        self.status.set(form.status);
        self.due_date
            .set(form.due_date.map(|d| d.to_string()).unwrap_or_default());
    }

    pub fn reset(&self) {
        self.fill(&TaskForm::default());
    }

    pub fn to_form(&self) -> TaskForm {
        TaskForm {
            title: self.title.get_untracked(),
            category: self.category.get_untracked(),
            status: self.status.get_untracked(),
            due_date: chrono::NaiveDate::parse_from_str(&self.due_date.get_untracked(), "%Y-%m-%d")
                .ok(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let dark_mode = theme::load_dark_mode();
    theme::apply_dark_mode(dark_mode);

    let store = RwSignal::new(TaskStore::with_dark_mode(dark_mode));
    let lifecycle = BoardLifecycle::new(store, HttpApi);
    let fields = FormFields::new();

    provide_context(store);
    provide_context(lifecycle.clone());
    provide_context(fields);

    // Initial load from the server.
    Effect::new({
        let lifecycle = lifecycle.clone();
        move |_| {
            let lifecycle = lifecycle.clone();
            spawn_local(async move {
                if let Err(e) = lifecycle.load().await {
                    leptos::logging::error!("failed to load tasks: {e}");
                }
            });
        }
    });

    view! {
        <div class="min-h-screen bg-gray-100 text-gray-900 dark:bg-gray-900 dark:text-gray-100">
            <div class="mx-auto max-w-6xl px-4 py-6">
                <header class="mb-6 flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"Task Manager"</h1>
                    <ThemeSwitcher />
                </header>

                <ProgressBar />
                <TaskFormCard />
                <FilterBar />
                <KanbanBoard />
                <TaskListView />
                <CalendarView />

                <footer class="mt-8 text-center text-sm text-gray-500 dark:text-gray-400">
                    "Drag tasks between columns to update their status"
                </footer>
            </div>
        </div>
    }
}
