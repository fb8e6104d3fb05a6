//! Task List View Component
//!
//! Renders the stored task list in order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    // Rows are addressed by position, so the key includes the index and
    // any change at a position re-renders that row.
    view! {
        <ul class="task-list">
            <For
                each=move || store.tasks().get().into_iter().enumerate()
                key=|(index, task)| (*index, task.clone())
                children=move |(index, task)| view! { <TaskRow index=index task=task /> }
            />
        </ul>
    }
}
