//! Global Application State Store
//!
//! Rendered snapshot of the view model, using Leptos reactive_stores for
//! field-level reactivity. Only `AppContext` writes to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TaskList;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current task list, in display order
    pub tasks: TaskList,
}

impl AppState {
    pub fn new(tasks: TaskList) -> Self {
        Self { tasks }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the rendered task list
pub fn store_set_tasks(store: &AppStore, tasks: TaskList) {
    *store.tasks().write() = tasks;
}
