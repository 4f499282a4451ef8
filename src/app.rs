//! Taskboard App
//!
//! Root component: provides context, owns the router and mounts the view for
//! the current path.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Shell;
use crate::context::AppContext;
use crate::events::{AppEvent, EventBus};
use crate::pages::{HomePage, ProjectDetailPage, ProjectsPage, SettingsPage, TasksPage};
use crate::router::{history, Navigator, RouteId, ROOT_PATH};
use crate::shortcuts::bind_shortcuts;
use crate::store::{store_commit, store_refine, NavStore, NavigationState, NavigationStateStoreFields};

const APP_NAME: &str = "Taskboard";

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(EventBus::new());
    let nav: NavStore = Store::new(NavigationState::default());
    provide_context(ctx);
    provide_context(nav);

    let navigator = StoredValue::new(Navigator::new());

    // The router is the only writer of the navigation store
    let route = move |path: String| {
        let outcome = navigator.with_value(|n| n.navigate(&path));
        if outcome.redirected {
            history::replace(ROOT_PATH);
        }
        log::debug!("route {path} -> {:?}", outcome.state.view);
        store_commit(&nav, outcome.state);
    };

    route(history::current_path());
    history::bind_popstate(route);

    ctx.subscribe_scoped(move |event| match event {
        AppEvent::Navigated => route(history::current_path()),
        AppEvent::NavigationRefined { ticket, title, breadcrumbs } => {
            if !store_refine(&nav, *ticket, title.clone(), breadcrumbs.clone()) {
                log::debug!("dropped refinement for a previous view");
            }
        }
        _ => {}
    });

    bind_shortcuts(ctx, nav);

    // Keep the tab title in step with the page title
    Effect::new(move |_| {
        let title = nav.title().get();
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&format!("{title} · {APP_NAME}"));
        }
    });

    // Every navigation mounts a fresh view, even between two projects
    let outlet = move || {
        nav.ticket().track();
        match nav.view().get_untracked() {
            RouteId::Home => view! { <HomePage /> }.into_any(),
            RouteId::Projects => view! { <ProjectsPage /> }.into_any(),
            RouteId::ProjectDetail => view! { <ProjectDetailPage /> }.into_any(),
            RouteId::Tasks => view! { <TasksPage /> }.into_any(),
            RouteId::Settings => view! { <SettingsPage /> }.into_any(),
        }
    };

    view! {
        <Shell>{outlet}</Shell>
    }
}
