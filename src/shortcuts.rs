//! Keyboard Shortcuts
//!
//! Global single-key shortcuts, skipped while the user is typing.

use crate::context::{AppContext, TaskForm};
use crate::dom;
use crate::store::{current_project_id, NavStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Search,
    NewProject,
    NewTask,
    Home,
}

impl Shortcut {
    /// Hint shown next to menu entries
    pub fn hint(self) -> &'static str {
        match self {
            Shortcut::Search => "/",
            Shortcut::NewProject => "P",
            Shortcut::NewTask => "T",
            Shortcut::Home => "H",
        }
    }
}

/// State of one keydown
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Focus is in an input, textarea, select or contenteditable
    pub typing: bool,
}

pub fn shortcut_for(press: KeyPress<'_>) -> Option<Shortcut> {
    if press.typing || press.ctrl || press.meta || press.alt {
        return None;
    }
    match press.key {
        "/" => Some(Shortcut::Search),
        "p" | "P" => Some(Shortcut::NewProject),
        "t" | "T" => Some(Shortcut::NewTask),
        "h" | "H" => Some(Shortcut::Home),
        _ => None,
    }
}

/// Install the window keydown handler
pub fn bind_shortcuts(ctx: AppContext, nav: NavStore) {
    dom::bind_window_listener("keydown", move |ev: web_sys::KeyboardEvent| {
        if ev.default_prevented() {
            return;
        }
        let key = ev.key();
        let press = KeyPress {
            key: &key,
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
            typing: dom::focus_in_form_control(),
        };
        let Some(shortcut) = shortcut_for(press) else { return };
        ev.prevent_default();
        log::debug!("shortcut {shortcut:?}");

        match shortcut {
            Shortcut::Search => ctx.open_search(),
            Shortcut::NewProject => ctx.open_project_form(None),
            Shortcut::NewTask => {
                let project_id = current_project_id(&nav);
                ctx.open_task_form(TaskForm::New { project_id });
            }
            Shortcut::Home => ctx.navigate("/"),
        }
    });
}
