//! Views
//!
//! One component per route, plus the loading plumbing they share.

mod home;
mod project_detail;
mod projects;
mod settings;
mod tasks;

pub use home::HomePage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use settings::SettingsPage;
pub use tasks::TasksPage;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::error::ApiError;
use crate::events::AppEvent;
use crate::search::Supersede;

/// Remote data as a view sees it
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Counter bumped whenever a bus event passes `filter`.
///
/// The subscription lives as long as the calling view.
pub fn reload_on(filter: fn(&AppEvent) -> bool) -> ReadSignal<u32> {
    let ctx = use_app();
    let (reload, set_reload) = signal(0u32);
    ctx.subscribe_scoped(move |event| {
        if filter(event) {
            set_reload.update(|n| *n += 1);
        }
    });
    reload
}

/// Run `fetch` now and again on every `reload` tick, storing the outcome in
/// `target`. Responses from superseded loads are dropped.
pub fn load_into<T, F, Fut>(target: RwSignal<Loadable<T>>, reload: ReadSignal<u32>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let loads = StoredValue::new(Supersede::new());
    Effect::new(move |_| {
        reload.track();
        let ticket = loads.with_value(Supersede::issue);
        let pending = fetch();
        spawn_local(async move {
            let outcome = pending.await;
            // The view may have unmounted while the request was out
            if loads.try_with_value(|l| l.is_current(ticket)) != Some(true) {
                return;
            }
            target.set(match outcome {
                Ok(value) => Loadable::Ready(value),
                Err(e) => {
                    log::warn!("load failed: {e}");
                    Loadable::Failed(e.to_string())
                }
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_accessor() {
        assert_eq!(Loadable::Ready(3).ready(), Some(&3));
        assert_eq!(Loadable::<u8>::Loading.ready(), None);
        assert_eq!(Loadable::<u8>::Failed("x".into()).ready(), None);
    }
}
