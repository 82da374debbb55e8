use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use leptos::prelude::*;

use taskboard::board::TaskStore;
use taskboard::model::Task;

/// Month calendar showing the visible tasks on their due dates.
#[component]
pub fn CalendarView() -> impl IntoView {
    let store = expect_context::<RwSignal<TaskStore>>();

    // First day of the displayed month.
    let month = RwSignal::new(first_of_month(Local::now().date_naive()));

    let prev_month = move |_| month.update(|m| *m = *m - Months::new(1));
    let next_month = move |_| month.update(|m| *m = *m + Months::new(1));

    let title = move || month.get().format("%B %Y").to_string();

    let weeks = move || month_grid(month.get());

    let tasks_on = move |day: NaiveDate| {
        store.with(|s| {
            s.filtered()
                .into_iter()
                .filter(|t| t.due_date == Some(day))
                .cloned()
                .collect::<Vec<Task>>()
        })
    };

    view! {
        <div class="rounded-lg bg-white p-4 shadow dark:bg-gray-800">
            <div class="mb-3 flex items-center justify-between">
                <button
                    class="rounded bg-gray-200 px-3 py-1 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600"
                    on:click=prev_month
                >
                    "<"
                </button>
                <h2 class="font-semibold">{title}</h2>
                <button
                    class="rounded bg-gray-200 px-3 py-1 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600"
                    on:click=next_month
                >
                    ">"
                </button>
            </div>
            <div class="grid grid-cols-7 gap-px text-center text-xs font-medium text-gray-500 dark:text-gray-400">
                {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                    .into_iter()
                    .map(|d| view! { <div class="py-1">{d}</div> })
                    .collect_view()}
            </div>
            {move || {
                weeks()
                    .into_iter()
                    .map(|week| {
                        view! {
                            <div class="grid grid-cols-7 gap-px">
                                {week
                                    .into_iter()
                                    .map(|day| {
                                        let in_month = day.month() == month.get().month();
                                        let day_tasks = tasks_on(day);
                                        view! {
                                            <div
                                                class="min-h-16 border border-gray-100 p-1 text-left text-xs dark:border-gray-700"
                                                class=("opacity-40", !in_month)
                                            >
                                                <div class="text-gray-500 dark:text-gray-400">
                                                    {day.day()}
                                                </div>
                                                {day_tasks
                                                    .into_iter()
                                                    .map(|t| {
                                                        view! {
                                                            <div class="mt-0.5 truncate rounded bg-blue-100 px-1 text-blue-800 dark:bg-blue-900 dark:text-blue-200">
                                                                {t.title}
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Sunday-aligned weeks covering the given month.
fn month_grid(first: NaiveDate) -> Vec<Vec<NaiveDate>> {
    let mut day = first;
    while day.weekday() != Weekday::Sun {
        day = day - Days::new(1);
    }

    let next_month = first + Months::new(1);
    let mut weeks = Vec::new();
    while day < next_month || day.weekday() != Weekday::Sun {
        if day.weekday() == Weekday::Sun {
            weeks.push(Vec::with_capacity(7));
        }
        if let Some(week) = weeks.last_mut() {
            week.push(day);
        }
        day = day + Days::new(1);
    }
    weeks
}
