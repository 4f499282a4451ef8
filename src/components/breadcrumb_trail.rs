//! Breadcrumb Trail Component

use leptos::prelude::*;

use crate::components::NavLink;
use crate::router::Breadcrumb;
use crate::store::{use_nav_store, NavigationStateStoreFields};

/// The last crumb is the current page and never a link
fn linked(crumbs: Vec<Breadcrumb>) -> Vec<Breadcrumb> {
    let last = crumbs.len().saturating_sub(1);
    crumbs
        .into_iter()
        .enumerate()
        .map(|(i, crumb)| if i == last { Breadcrumb::current(crumb.label) } else { crumb })
        .collect()
}

#[component]
pub fn BreadcrumbTrail() -> impl IntoView {
    let nav = use_nav_store();

    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            {move || {
                linked(nav.breadcrumbs().get())
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let separator = (i > 0).then(|| view! { <span class="separator">"/"</span> });
                        let item = match crumb.href {
                            Some(href) => view! { <NavLink href=href>{crumb.label}</NavLink> }.into_any(),
                            None => view! { <span class="current">{crumb.label}</span> }.into_any(),
                        };
                        view! { {separator} {item} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
