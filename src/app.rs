//! Todo Widget App
//!
//! Root component: loads saved tasks, provides context, lays out the page.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::AppStateStoreFields;
use crate::view_model::TodoViewModel;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage = BrowserStorage::new(config.storage_key);
    log::info!(target: "APP", "Loading tasks from localStorage key {:?}", storage.key());
    let view_model = TodoViewModel::load(storage);
    log::info!(target: "APP", "Loaded {} tasks", view_model.tasks().len());

    let ctx = AppContext::new(view_model);
    provide_context(ctx);
    provide_context(ctx.store);

    let tasks = ctx.store.tasks();

    view! {
        <div class="todo-container">
            <div class="todo-paper">
                <h1>"Todo List"</h1>

                <NewTaskForm />

                <TaskListView />

                <p class="task-count">
                    {move || tasks.with(|t| format!("{} pending, {} done", t.pending_count(), t.done_count()))}
                </p>
            </div>
        </div>
    }
}
