//! Browser History
//!
//! Reads the current location and records navigations in the session
//! history.

use wasm_bindgen::JsValue;

use super::ROOT_PATH;
use crate::dom;

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| ROOT_PATH.to_string())
}

pub fn push(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::warn!("pushState failed for {path}: {e:?}");
    }
}

pub fn replace(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::warn!("replaceState failed for {path}: {e:?}");
    }
}

/// Call `on_change` with the new path on back/forward
pub fn bind_popstate(mut on_change: impl FnMut(String) + 'static) {
    dom::bind_window_listener("popstate", move |_: web_sys::PopStateEvent| {
        on_change(current_path());
    });
}
