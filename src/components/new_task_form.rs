//! New Task Form Component
//!
//! Text input plus "Add Task" button. Submitting the form covers both the
//! button click and Enter in the input.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is rejected and kept for correction
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                class="new-task-input"
                placeholder="Add a task"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add Task"</button>
        </form>
    }
}
