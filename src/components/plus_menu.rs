//! Plus Menu Component
//!
//! Header dropdown for creating projects and tasks.

use leptos::prelude::*;

use crate::context::{use_app, TaskForm};
use crate::shortcuts::Shortcut;
use crate::store::{current_project_id, use_nav_store};

#[component]
pub fn PlusMenu() -> impl IntoView {
    let ctx = use_app();
    let nav = use_nav_store();
    let (open, set_open) = signal(false);

    let new_project = move |_: web_sys::MouseEvent| {
        set_open.set(false);
        ctx.open_project_form(None);
    };

    let new_task = move |_: web_sys::MouseEvent| {
        set_open.set(false);
        ctx.open_task_form(TaskForm::New {
            project_id: current_project_id(&nav),
        });
    };

    view! {
        <div class="plus-menu">
            <button
                class="icon-btn"
                aria-label="New"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "+"
            </button>
            <Show when=move || open.get()>
                <div class="menu" role="menu" on:mouseleave=move |_| set_open.set(false)>
                    <button class="menu-item" role="menuitem" on:click=new_project>
                        "New Project"
                        <span class="shortcut">{Shortcut::NewProject.hint()}</span>
                    </button>
                    <button class="menu-item" role="menuitem" on:click=new_task>
                        "New Task"
                        <span class="shortcut">{Shortcut::NewTask.hint()}</span>
                    </button>
                </div>
            </Show>
        </div>
    }
}
