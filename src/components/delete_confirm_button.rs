//! Delete Button
//!
//! Small × button that asks for confirmation before deleting a project or task.

use leptos::prelude::*;

use crate::dom;

/// What the confirm dialog asks for a project or a task
pub fn delete_prompt(what: &str) -> String {
    format!("Delete {what}?")
}

/// Runs `on_confirm` only after the user accepts `prompt`.
///
/// Clicks never reach the card or row underneath.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let label = prompt.clone();
    view! {
        <button
            class=button_class
            aria-label=label
            on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                if dom::confirm(&prompt) {
                    on_confirm.run(());
                }
            }
        >
            "×"
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt() {
        assert_eq!(delete_prompt("project"), "Delete project?");
        assert_eq!(delete_prompt("task"), "Delete task?");
    }
}
