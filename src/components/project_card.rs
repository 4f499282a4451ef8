//! Project Card Component
//!
//! Grid tile for one project. Click or Enter opens it; Delete removes it.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{delete_prompt, DeleteConfirmButton};
use crate::context::{use_app, AppContext};
use crate::events::AppEvent;
use crate::format::{full_time, relative_time};
use crate::models::Project;
use crate::{dom, services};

/// Delete `id` and tell the rest of the app; failures are shown in an alert
pub fn delete_project(ctx: AppContext, id: String, on_done: impl FnOnce() + 'static) {
    spawn_local(async move {
        match services::delete_project(&id).await {
            Ok(()) => {
                log::info!("deleted project {id}");
                ctx.publish(AppEvent::ProjectDeleted(id));
                on_done();
            }
            Err(e) => dom::alert(&e.to_string()),
        }
    });
}

/// Description text worth a line on the card
fn card_description(project: &Project) -> Option<String> {
    project
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let ctx = use_app();
    let open_href = format!("/projects/{}", project.id);
    let open = move || ctx.navigate(&open_href);
    let open_on_click = open.clone();

    let id = project.id.clone();
    let delete_id = id.clone();
    let edit_project = project.clone();
    let updated = project.updated_at;

    view! {
        <div
            class="project-card"
            tabindex="0"
            on:click=move |_| open_on_click()
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => {
                    ev.prevent_default();
                    open();
                }
                "Delete" => {
                    ev.prevent_default();
                    if dom::confirm(&delete_prompt("project")) {
                        delete_project(ctx, id.clone(), || {});
                    }
                }
                _ => {}
            }
        >
            <div class="card-header">
                <div class="title" title=project.name.clone()>{project.name.clone()}</div>
                <div class="actions">
                    <button
                        class="edit-btn"
                        aria-label="Edit"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.open_project_form(Some(edit_project.clone()));
                        }
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        prompt=delete_prompt("project")
                        on_confirm=move |_| delete_project(ctx, delete_id.clone(), || {})
                    />
                </div>
            </div>
            <div class="card-body">
                {card_description(&project).map(|d| {
                    let full = d.clone();
                    view! { <p class="description" title=full>{d}</p> }
                })}
            </div>
            <div class="card-footer">
                <span class="meta" title=full_time(updated)>
                    {relative_time(Utc::now(), updated)}
                </span>
            </div>
        </div>
    }
}
