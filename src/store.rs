//! Navigation State Store
//!
//! Uses Leptos reactive_stores so the shell can track title and breadcrumbs
//! separately from the mounted view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::router::{Breadcrumb, Params, RouteId};
use crate::search::Ticket;

/// What the router currently shows. Only the router writes it.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct NavigationState {
    pub view: RouteId,
    pub params: Params,
    pub title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Navigation that produced this state; refinements must present it
    pub ticket: Option<Ticket>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            view: RouteId::Home,
            params: Params::default(),
            title: String::new(),
            breadcrumbs: Vec::new(),
            ticket: None,
        }
    }
}

impl NavigationState {
    /// Second-phase update from a view that loaded its own data.
    ///
    /// Ignored unless `ticket` is the navigation currently shown.
    pub fn refine(&mut self, ticket: Ticket, title: String, breadcrumbs: Vec<Breadcrumb>) -> bool {
        if self.ticket != Some(ticket) {
            return false;
        }
        self.title = title;
        self.breadcrumbs = breadcrumbs;
        true
    }
}

/// Type alias for the store
pub type NavStore = Store<NavigationState>;

/// Get the navigation store from context
pub fn use_nav_store() -> NavStore {
    expect_context::<NavStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole navigation state after a route change
pub fn store_commit(store: &NavStore, state: NavigationState) {
    store.set(state);
}

/// Apply a refinement; returns false when it arrived for a stale navigation
pub fn store_refine(store: &NavStore, ticket: Ticket, title: String, breadcrumbs: Vec<Breadcrumb>) -> bool {
    store
        .try_update(|state| state.refine(ticket, title, breadcrumbs))
        .unwrap_or(false)
}

/// Project shown by the detail view, if that is the current view
pub fn current_project_id(store: &NavStore) -> Option<String> {
    store.with_untracked(|state| match state.view {
        RouteId::ProjectDetail => state.params.get("id").map(str::to_string),
        _ => None,
    })
}
