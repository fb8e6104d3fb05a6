//! UI Components
//!
//! Leptos components for the todo widget.

mod new_task_form;
mod task_list_view;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
