mod calendar;
mod filter_bar;
mod kanban;
mod progress_bar;
mod task_form;
mod task_list;
mod theme_switcher;

pub use calendar::CalendarView;
pub use filter_bar::FilterBar;
pub use kanban::KanbanBoard;
pub use progress_bar::ProgressBar;
pub use task_form::TaskFormCard;
pub use task_list::TaskListView;
pub use theme_switcher::ThemeSwitcher;
