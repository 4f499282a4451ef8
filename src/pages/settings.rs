//! Settings View
//!
//! CSV export and import, and deleting all data.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;
use crate::context::use_app;
use crate::events::AppEvent;
use crate::services::{self, export_url, selected_files};
use crate::dom;

fn summary(verb: &str, files: &[String]) -> String {
    if files.is_empty() {
        format!("Nothing {}.", verb.to_lowercase())
    } else {
        format!("{verb} {}: {}", files.len(), files.join(", "))
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app();
    let (busy, set_busy) = signal(false);
    let (status, set_status) = signal::<Option<String>>(None);
    let (confirm_open, set_confirm_open) = signal(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let export = move |_: web_sys::MouseEvent| {
        set_busy.set(true);
        spawn_local(async move {
            match services::export_data().await {
                Ok(files) => {
                    let exports_path = &config::current().exports_path;
                    for file in &files {
                        dom::open_in_new_tab(&export_url(exports_path, file));
                    }
                    set_status.set(Some(summary("Exported", &files)));
                }
                Err(e) => dom::alert(&e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let import = move |_: web_sys::MouseEvent| {
        let files = file_input
            .get_untracked()
            .map(|input| selected_files(&input))
            .unwrap_or_default();
        if files.is_empty() {
            dom::alert("Please select one or more CSV files to import.");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match services::import_data(&files).await {
                Ok(imported) => {
                    log::info!("imported {} files", imported.len());
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    set_status.set(Some(summary("Imported", &imported)));
                    ctx.publish(AppEvent::DataImported);
                }
                Err(e) => dom::alert(&e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let delete_everything = move |_: web_sys::MouseEvent| {
        set_confirm_open.set(false);
        set_busy.set(true);
        spawn_local(async move {
            match services::delete_all().await {
                Ok(message) => {
                    log::info!("all data deleted");
                    set_status.set(Some(message));
                    ctx.publish(AppEvent::DataCleared);
                }
                Err(e) => dom::alert(&e.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="settings">
            <div class="settings-group">
                <h2>"Export"</h2>
                <p>"Download every project and task as CSV."</p>
                <button class="primary" disabled=move || busy.get() on:click=export>"Export data"</button>
            </div>

            <div class="settings-group">
                <h2>"Import"</h2>
                <input type="file" accept=".csv" multiple node_ref=file_input />
                <button disabled=move || busy.get() on:click=import>"Import data"</button>
            </div>

            <div class="settings-group danger">
                <h2>"Danger zone"</h2>
                <button class="danger" disabled=move || busy.get() on:click=move |_| set_confirm_open.set(true)>
                    "Delete all data"
                </button>
            </div>

            {move || status.get().map(|msg| view! { <p class="status">{msg}</p> })}
        </section>

        <Show when=move || confirm_open.get()>
            <div class="modal-backdrop" on:click=move |_| set_confirm_open.set(false)>
                <div class="modal" role="alertdialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <h2>"Delete all data?"</h2>
                    <p>"This removes every project and task. It cannot be undone."</p>
                    <div class="modal-footer">
                        <button class="cancel-btn" on:click=move |_| set_confirm_open.set(false)>"Cancel"</button>
                        <button class="danger" on:click=delete_everything>"Delete everything"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        assert_eq!(summary("Imported", &[]), "Nothing imported.");
        assert_eq!(
            summary("Exported", &["projects.csv".into(), "tasks.csv".into()]),
            "Exported 2: projects.csv, tasks.csv"
        );
    }
}
