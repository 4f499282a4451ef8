//! Task Form Dialog
//!
//! Modal for creating and editing tasks. Enter submits from any single-line
//! field.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::{use_app, TaskForm};
use crate::events::AppEvent;
use crate::models::TaskInput;
use crate::{dom, services};

const TITLE_INPUT_ID: &str = "task-form-title";

fn task_input(title: &str, description: &str, project_id: Option<String>) -> Option<TaskInput> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    Some(TaskInput {
        title: title.to_string(),
        description: description.trim().to_string(),
        project_id,
    })
}

/// Plain Enter outside a textarea or button submits; any modifier keeps
/// default behaviour
fn submits_on_enter(key: &str, target_tag: &str, modifiers: bool) -> bool {
    key == "Enter"
        && !modifiers
        && !target_tag.eq_ignore_ascii_case("TEXTAREA")
        && !target_tag.eq_ignore_ascii_case("BUTTON")
}

#[component]
pub fn TaskFormDialog() -> impl IntoView {
    let ctx = use_app();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (invalid, set_invalid) = signal(false);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let (t, d) = match ctx.task_form.get() {
            Some(TaskForm::Edit(task)) => (task.title, task.description.unwrap_or_default()),
            Some(TaskForm::New { .. }) => (String::new(), String::new()),
            None => return,
        };
        set_title.set(t);
        set_description.set(d);
        set_invalid.set(false);
        dom::after_frame(|| dom::focus_and_reveal(TITLE_INPUT_ID));
    });

    let close = move || ctx.task_form.set(None);
    let is_edit = move || matches!(ctx.task_form.get(), Some(TaskForm::Edit(_)));
    let project_id = move || ctx.task_form.with(|f| f.as_ref().and_then(TaskForm::project_id));

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let Some(mode) = ctx.task_form.get_untracked() else { return };
        let Some(input) = task_input(&title.get_untracked(), &description.get_untracked(), mode.project_id()) else {
            set_invalid.set(true);
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            let outcome = match &mode {
                TaskForm::New { .. } => services::create_task(&input).await.map(AppEvent::TaskCreated),
                TaskForm::Edit(task) => services::update_task(&task.id, &input)
                    .await
                    .map(AppEvent::TaskUpdated),
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

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
            return;
        }
        let tag = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.tag_name())
            .unwrap_or_default();
        let modifiers = ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.shift_key();
        if submits_on_enter(&ev.key(), &tag, modifiers) {
            ev.prevent_default();
            save();
        }
    };

    view! {
        <Show when=move || ctx.task_form.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>{move || if is_edit() { "Edit Task" } else { "New Task" }}</h2>
                    <form
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            save();
                        }
                    >
                        <label for=TITLE_INPUT_ID>"Title"</label>
                        <input
                            id=TITLE_INPUT_ID
                            type="text"
                            required
                            class:invalid=move || invalid.get()
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                set_invalid.set(false);
                                set_title.set(event_target_value(&ev));
                            }
                        />
                        <Show when=move || invalid.get()>
                            <p class="field-error">"Required"</p>
                        </Show>
                        <label for="task-form-description">"Description"</label>
                        <textarea
                            id="task-form-description"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                        <div class="modal-footer">
                            {move || project_id().map(|id| view! { <p class="form-note">"Project: " {id}</p> })}
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
    fn test_enter_submits_from_inputs_only() {
        assert!(submits_on_enter("Enter", "INPUT", false));
        assert!(!submits_on_enter("Enter", "TEXTAREA", false));
        assert!(!submits_on_enter("Enter", "textarea", false));
        assert!(!submits_on_enter("Enter", "BUTTON", false));
        assert!(!submits_on_enter("Enter", "INPUT", true));
        assert!(!submits_on_enter("a", "INPUT", false));
    }

    #[test]
    fn test_task_input_keeps_project_binding() {
        let input = task_input(" Write docs ", "", Some("p1".into())).unwrap();
        assert_eq!(input.title, "Write docs");
        assert_eq!(input.project_id.as_deref(), Some("p1"));
        assert_eq!(task_input("", "x", None), None);
    }
}
