//! DOM Helpers
//!
//! Window listeners, animation-frame scheduling and native dialogs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Listen for `event` on the window for the rest of the app's life
pub fn bind_window_listener<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let callback = Closure::<dyn FnMut(E)>::new(handler);
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    }
    callback.forget();
}

/// Run `f` before the next repaint (after the current render settles)
pub fn after_frame(f: impl FnOnce() + 'static) {
    let Some(win) = web_sys::window() else { return };
    let callback = Closure::once_into_js(f);
    let _ = win.request_animation_frame(callback.unchecked_ref());
}

/// Focus the element with `id` and scroll it into view if needed
pub fn focus_and_reveal(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_block(web_sys::ScrollLogicalPosition::Nearest);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.focus();
    }
}

/// Whether focus sits in something the user types into
pub fn focus_in_form_control() -> bool {
    let Some(active) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
    else {
        return false;
    };
    let editable = active
        .dyn_ref::<web_sys::HtmlElement>()
        .map_or(false, |el| el.is_content_editable());
    editable || is_form_tag(&active.node_name())
}

pub fn is_form_tag(node_name: &str) -> bool {
    matches!(
        node_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Open `url` in a new tab
pub fn open_in_new_tab(url: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_form_tag() {
        assert!(is_form_tag("INPUT"));
        assert!(is_form_tag("textarea"));
        assert!(is_form_tag("SELECT"));
        assert!(!is_form_tag("BUTTON"));
        assert!(!is_form_tag("DIV"));
    }
}
