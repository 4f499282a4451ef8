//! Nav Link Component
//!
//! Anchor that routes in-app instead of reloading the page.

use leptos::prelude::*;

use crate::context::use_app;

/// Plain clicks navigate through the router; modified clicks keep browser behaviour
#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app();
    let target = href.clone();

    view! {
        <a
            href=href
            class=class
            aria-label=label
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
                    return;
                }
                ev.prevent_default();
                ctx.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}
