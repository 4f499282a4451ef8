//! Tasks View

use leptos::prelude::*;

use super::{load_into, reload_on, Loadable};
use crate::components::TaskList;
use crate::config;
use crate::context::{use_app, TaskForm};
use crate::events::AppEvent;
use crate::models::Task;
use crate::services;

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app();
    let loaded = RwSignal::new(Loadable::<Vec<Task>>::Loading);
    let reload = reload_on(AppEvent::touches_tasks);
    load_into(loaded, reload, || services::fetch_tasks(0, config::current().page_size));

    // TaskList edits this copy optimistically
    let tasks = RwSignal::new(Vec::<Task>::new());
    Effect::new(move |_| {
        if let Loadable::Ready(list) = loaded.get() {
            tasks.set(list);
        }
    });

    view! {
        <div class="page-actions">
            <button
                class="primary"
                on:click=move |_| ctx.open_task_form(TaskForm::New { project_id: None })
            >
                "New Task"
            </button>
        </div>
        {move || match loaded.get() {
            Loadable::Loading => view! { <p class="loading">"Loading tasks…"</p> }.into_any(),
            Loadable::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
            Loadable::Ready(_) => view! { <TaskList tasks=tasks /> }.into_any(),
        }}
    }
}
