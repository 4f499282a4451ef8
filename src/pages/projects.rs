//! Projects View
//!
//! Grid of every project.

use leptos::prelude::*;

use super::{load_into, reload_on, Loadable};
use crate::components::ProjectCard;
use crate::config;
use crate::context::use_app;
use crate::events::AppEvent;
use crate::models::Project;
use crate::services;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app();
    let projects = RwSignal::new(Loadable::<Vec<Project>>::Loading);
    let reload = reload_on(AppEvent::touches_projects);
    load_into(projects, reload, || services::fetch_projects(0, config::current().page_size));

    view! {
        <div class="page-actions">
            <button class="primary" on:click=move |_| ctx.open_project_form(None)>"New Project"</button>
        </div>
        {move || match projects.get() {
            Loadable::Loading => view! { <p class="loading">"Loading projects…"</p> }.into_any(),
            Loadable::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
            Loadable::Ready(list) if list.is_empty() => {
                view! { <p class="empty">"No projects yet."</p> }.into_any()
            }
            Loadable::Ready(list) => view! {
                <div class="project-grid">
                    {list.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            }
            .into_any(),
        }}
    }
}
