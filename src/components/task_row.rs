//! Task Row Component
//!
//! One task: completion checkbox, text, delete button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Task;

/// A single task row, addressed by its position in the list
#[component]
pub fn TaskRow(index: usize, task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let done = task.done;

    view! {
        <li class=if done { "task-row done" } else { "task-row" }>
            // Divider between tasks
            {(index > 0).then(|| view! { <hr class="task-divider" /> })}
            <div class="task-row-body">
                <input
                    type="checkbox"
                    prop:checked=done
                    on:change=move |_| {
                        ctx.toggle_done(index);
                    }
                />
                <span
                    class="task-text"
                    style=if done { "text-decoration: line-through;" } else { "text-decoration: none;" }
                >
                    {task.text}
                </span>
                <button
                    class="delete-btn"
                    aria-label="delete"
                    on:click=move |_| {
                        ctx.remove_task(index);
                    }
                >
                    "×"
                </button>
            </div>
        </li>
    }
}
