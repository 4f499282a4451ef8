//! Project Form Dialog
//!
//! Modal for creating and editing projects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app, ProjectForm};
use crate::events::AppEvent;
use crate::models::ProjectInput;
use crate::{dom, services};

const NAME_INPUT_ID: &str = "project-form-name";

/// Trimmed input, or `None` when the required name is blank
fn project_input(name: &str, description: &str) -> Option<ProjectInput> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(ProjectInput {
        name: name.to_string(),
        description: description.trim().to_string(),
    })
}

#[component]
pub fn ProjectFormDialog() -> impl IntoView {
    let ctx = use_app();
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (invalid, set_invalid) = signal(false);
    let (saving, set_saving) = signal(false);

    // Fill the fields whenever the dialog opens
    Effect::new(move |_| {
        let (n, d) = match ctx.project_form.get() {
            Some(ProjectForm::Edit(project)) => (project.name, project.description.unwrap_or_default()),
            Some(ProjectForm::New) => (String::new(), String::new()),
            None => return,
        };
        set_name.set(n);
        set_description.set(d);
        set_invalid.set(false);
        dom::after_frame(|| dom::focus_and_reveal(NAME_INPUT_ID));
    });

    let close = move || ctx.project_form.set(None);
    let is_edit = move || matches!(ctx.project_form.get(), Some(ProjectForm::Edit(_)));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(input) = project_input(&name.get_untracked(), &description.get_untracked()) else {
            set_invalid.set(true);
            return;
        };
        let Some(mode) = ctx.project_form.get_untracked() else { return };
        set_saving.set(true);
        spawn_local(async move {
            let outcome = match &mode {
                ProjectForm::New => services::create_project(&input).await.map(AppEvent::ProjectCreated),
                ProjectForm::Edit(project) => services::update_project(&project.id, &input)
                    .await
                    .map(AppEvent::ProjectUpdated),
            };
            set_saving.set(false);
            match outcome {
                Ok(event) => {
                    close();
                    ctx.publish(event);
                }
                Err(e) => dom::alert(&e.to_string()),
            }
        });
    };

    view! {
        <Show when=move || ctx.project_form.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close();
                        }
                    }
                >
                    <h2>{move || if is_edit() { "Edit Project" } else { "New Project" }}</h2>
                    <form on:submit=submit>
                        <label for=NAME_INPUT_ID>"Name"</label>
                        <input
                            id=NAME_INPUT_ID
                            type="text"
                            required
                            class:invalid=move || invalid.get()
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                set_invalid.set(false);
                                set_name.set(event_target_value(&ev));
                            }
                        />
                        <Show when=move || invalid.get()>
                            <p class="field-error">"Required"</p>
                        </Show>
                        <label for="project-form-description">"Description"</label>
                        <textarea
                            id="project-form-description"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                        <div class="modal-footer">
                            <button type="button" class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="primary" disabled=move || saving.get()>
                                {move || if is_edit() { "Update" } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        assert_eq!(project_input("   ", "desc"), None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let input = project_input("  Alpha ", " first ").unwrap();
        assert_eq!(input.name, "Alpha");
        assert_eq!(input.description, "first");
    }
}
