//! App Shell
//!
//! Header, breadcrumbs and the dialogs shared by every view.

use leptos::prelude::*;

use crate::components::{
    BreadcrumbTrail, NavLink, PlusMenu, ProjectFormDialog, SearchDialog, TaskFormDialog,
};
use crate::context::use_app;
use crate::shortcuts::Shortcut;
use crate::store::{use_nav_store, NavigationStateStoreFields};

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_app();
    let nav = use_nav_store();

    view! {
        <div class="app-shell">
            <header class="app-header">
                <div class="left">
                    <NavLink href="/" class="logo-link">"Projects"</NavLink>
                </div>
                <div class="title">{move || nav.title().get()}</div>
                <div class="right">
                    <button
                        class="icon-btn"
                        aria-label="Search"
                        title=format!("Search ({})", Shortcut::Search.hint())
                        on:click=move |_| ctx.open_search()
                    >
                        "⌕"
                    </button>
                    <PlusMenu />
                    <NavLink href="/settings" class="icon-btn" label="Settings">"⚙"</NavLink>
                </div>
            </header>
            <BreadcrumbTrail />
            <main class="app-main">{children()}</main>
            <ProjectFormDialog />
            <TaskFormDialog />
            <SearchDialog />
        </div>
    }
}
