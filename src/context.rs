//! Application Context
//!
//! Shared handle provided via Leptos Context API. Components mutate tasks
//! only through here so the view model, storage and store stay in step.

use leptos::prelude::*;

use crate::storage::BrowserStorage;
use crate::store::{store_set_tasks, AppState, AppStore};
use crate::view_model::TodoViewModel;

type BrowserViewModel = TodoViewModel<BrowserStorage>;

#[derive(Clone, Copy)]
pub struct AppContext {
    view_model: StoredValue<BrowserViewModel, LocalStorage>,
    /// Rendered state, refreshed after every accepted mutation
    pub store: AppStore,
}

impl AppContext {
    pub fn new(view_model: BrowserViewModel) -> Self {
        let store = AppStore::new(AppState::new(view_model.tasks().clone()));
        Self {
            view_model: StoredValue::new_local(view_model),
            store,
        }
    }

    /// Returns false when the text was blank and nothing was added
    pub fn add_task(&self, text: &str) -> bool {
        self.apply(|vm| vm.add_task(text))
    }

    pub fn toggle_done(&self, index: usize) -> bool {
        self.apply(|vm| vm.toggle_done(index))
    }

    pub fn remove_task(&self, index: usize) -> bool {
        self.apply(|vm| vm.remove_task(index))
    }

    fn apply(&self, op: impl FnOnce(&mut BrowserViewModel) -> bool) -> bool {
        let changed = self.view_model.try_update_value(op).unwrap_or(false);
        if changed {
            let tasks = self.view_model.with_value(|vm| vm.tasks().clone());
            store_set_tasks(&self.store, tasks);
        }
        changed
    }
}

/// Get the app context, panicking if `App` did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
