//! Project Detail View
//!
//! One project and its tasks. Once the project loads, its name replaces the
//! generic breadcrumb.

use leptos::prelude::*;

use super::{load_into, reload_on, Loadable};
use crate::components::{delete_project, delete_prompt, DeleteConfirmButton, TaskList};
use crate::context::{use_app, TaskForm};
use crate::events::AppEvent;
use crate::models::{Project, Task};
use crate::router::{Breadcrumb, RouteId};
use crate::services;
use crate::store::{use_nav_store, NavigationStateStoreFields};

fn project_breadcrumbs(project: &Project) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("Projects", "/projects"),
        Breadcrumb::new(project.name.clone(), format!("/projects/{}", project.id)),
    ]
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let ctx = use_app();
    let nav = use_nav_store();
    let id = nav
        .params()
        .with_untracked(|p| p.get("id").map(str::to_string))
        .unwrap_or_default();
    let ticket = nav.ticket().get_untracked();

    let project = RwSignal::new(Loadable::<Project>::Loading);
    let loaded_tasks = RwSignal::new(Loadable::<Vec<Task>>::Loading);
    let tasks = RwSignal::new(Vec::<Task>::new());

    let project_id = id.clone();
    load_into(project, reload_on(AppEvent::touches_projects), move || {
        let id = project_id.clone();
        async move { services::fetch_project(&id).await }
    });
    let tasks_id = id.clone();
    load_into(loaded_tasks, reload_on(AppEvent::touches_tasks), move || {
        let id = tasks_id.clone();
        async move { services::fetch_project_tasks(&id).await }
    });

    Effect::new(move |_| {
        if let Loadable::Ready(list) = loaded_tasks.get() {
            tasks.set(list);
        }
    });

    // Name the breadcrumb after the project once it is known
    Effect::new(move |_| {
        let Some(ticket) = ticket else { return };
        project.with(|p| {
            if let Some(project) = p.ready() {
                ctx.publish(AppEvent::NavigationRefined {
                    ticket,
                    title: RouteId::ProjectDetail.title().to_string(),
                    breadcrumbs: project_breadcrumbs(project),
                });
            }
        });
    });

    let task_project_id = id.clone();

    view! {
        {move || match project.get() {
            Loadable::Loading => view! { <p class="loading">"Loading project…"</p> }.into_any(),
            Loadable::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
            Loadable::Ready(p) => {
                let edit = p.clone();
                let delete_id = p.id.clone();
                view! {
                    <section class="project-detail">
                        <div class="detail-header">
                            <h1>{p.name.clone()}</h1>
                            <div class="actions">
                                <button
                                    class="edit-btn"
                                    on:click=move |_| ctx.open_project_form(Some(edit.clone()))
                                >
                                    "Edit"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    prompt=delete_prompt("project")
                                    on_confirm=move |_| {
                                        delete_project(ctx, delete_id.clone(), move || ctx.navigate("/projects"))
                                    }
                                />
                            </div>
                        </div>
                        {p.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                            <p class="description">{d}</p>
                        })}
                    </section>
                }
                .into_any()
            }
        }}
        <section class="project-tasks">
            <div class="section-header">
                <h2>"Tasks"</h2>
                <button
                    class="primary"
                    on:click=move |_| ctx.open_task_form(TaskForm::New {
                        project_id: Some(task_project_id.clone()),
                    })
                >
                    "New Task"
                </button>
            </div>
            {move || match loaded_tasks.get() {
                Loadable::Loading => view! { <p class="loading">"Loading tasks…"</p> }.into_any(),
                Loadable::Failed(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                Loadable::Ready(_) => view! { <TaskList tasks=tasks /> }.into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_breadcrumbs_name_the_project() {
        let project = Project {
            id: "p1".into(),
            name: "Alpha".into(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(
            project_breadcrumbs(&project),
            vec![
                Breadcrumb::new("Projects", "/projects"),
                Breadcrumb::new("Alpha", "/projects/p1"),
            ]
        );
    }
}
