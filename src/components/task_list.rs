//! Task List Component
//!
//! Checklist of tasks with optimistic completion toggling.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{delete_prompt, DeleteConfirmButton};
use crate::context::{use_app, TaskForm};
use crate::error::ApiError;
use crate::events::AppEvent;
use crate::models::Task;
use crate::{dom, services};

/// Set `completed` on task `id`, returning what it was before
fn set_completed(tasks: &mut [Task], id: &str, completed: bool) -> Option<bool> {
    let task = tasks.iter_mut().find(|t| t.id == id)?;
    Some(std::mem::replace(&mut task.completed, completed))
}

/// Apply the server's answer to an optimistic toggle.
///
/// A failure puts `previous` back and returns the message to show.
fn settle_toggle(
    tasks: &mut [Task],
    id: &str,
    previous: bool,
    outcome: &Result<Task, ApiError>,
) -> Option<String> {
    match outcome {
        Ok(_) => None,
        Err(e) => {
            set_completed(tasks, id, previous);
            Some(e.to_string())
        }
    }
}

#[component]
pub fn TaskList(tasks: RwSignal<Vec<Task>>) -> impl IntoView {
    let ctx = use_app();

    // Show the new state at once; put it back if the server refuses
    let toggle = move |id: String, completed: bool| {
        let Some(previous) = tasks.try_update(|list| set_completed(list, &id, completed)).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = services::toggle_task(&id, completed).await;
            let failure = tasks
                .try_update(|list| settle_toggle(list, &id, previous, &outcome))
                .flatten();
            if let Some(message) = failure {
                log::warn!("toggle {id} failed: {message}");
                dom::alert(&message);
            } else if let Ok(task) = outcome {
                ctx.publish(AppEvent::TaskUpdated(task));
            }
        });
    };

    let delete = move |id: String| {
        spawn_local(async move {
            match services::delete_task(&id).await {
                Ok(()) => ctx.publish(AppEvent::TaskDeleted(id)),
                Err(e) => dom::alert(&e.to_string()),
            }
        });
    };

    view! {
        <Show
            when=move || tasks.with(|t| !t.is_empty())
            fallback=|| view! { <p class="empty">"No tasks yet."</p> }
        >
            <ul class="task-list">
                <For
                    each=move || tasks.get()
                    key=|task| (task.id.clone(), task.completed, task.updated_at)
                    children=move |task| {
                        let toggle_id = task.id.clone();
                        let delete_id = task.id.clone();
                        let completed = task.completed;
                        let edit_task = task.clone();
                        view! {
                            <li class="task-row">
                                <input
                                    type="checkbox"
                                    prop:checked=completed
                                    on:change=move |ev| toggle(toggle_id.clone(), event_target_checked(&ev))
                                />
                                <span class=if completed { "title done" } else { "title" }>
                                    {task.title.clone()}
                                </span>
                                <div class="row-actions">
                                    <button
                                        class="edit-btn"
                                        aria-label="Edit"
                                        on:click=move |_| ctx.open_task_form(TaskForm::Edit(edit_task.clone()))
                                    >
                                        "✎"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        prompt=delete_prompt("task")
                                        on_confirm=move |_| delete(delete_id.clone())
                                    />
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
