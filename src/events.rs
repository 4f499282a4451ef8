//! App Event Bus
//!
//! Typed publish/subscribe between views. Dropping a `Subscription`
//! unsubscribes its handler.

use std::sync::{Arc, Mutex};

use crate::models::{Project, Task};
use crate::router::Breadcrumb;
use crate::search::Ticket;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Navigated,
    ProjectCreated(Project),
    ProjectUpdated(Project),
    ProjectDeleted(String),
    TaskCreated(Task),
    TaskUpdated(Task),
    TaskDeleted(String),
    DataImported,
    DataCleared,
    NavigationRefined {
        ticket: Ticket,
        title: String,
        breadcrumbs: Vec<Breadcrumb>,
    },
}

impl AppEvent {
    pub fn touches_projects(&self) -> bool {
        matches!(
            self,
            AppEvent::ProjectCreated(_)
                | AppEvent::ProjectUpdated(_)
                | AppEvent::ProjectDeleted(_)
                | AppEvent::DataImported
                | AppEvent::DataCleared
        )
    }

    pub fn touches_tasks(&self) -> bool {
        matches!(
            self,
            AppEvent::TaskCreated(_)
                | AppEvent::TaskUpdated(_)
                | AppEvent::TaskDeleted(_)
                | AppEvent::ProjectDeleted(_)
                | AppEvent::DataImported
                | AppEvent::DataCleared
        )
    }
}

type Handler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl Fn(&AppEvent) + Send + Sync + 'static) -> Subscription {
        let mut registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        registry.next_id += 1;
        let id = registry.next_id;
        registry.handlers.push((id, Arc::new(handler)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every handler registered at the time of the call
    pub fn publish(&self, event: AppEvent) {
        log::debug!("publish {event:?}");
        // Snapshot so handlers may subscribe or unsubscribe while running
        let handlers: Vec<Handler> = {
            let registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
            registry.handlers.iter().map(|(_, h)| h.clone()).collect()
        };
        for handler in handlers {
            handler(&event);
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.registry
            .lock()
            .map(|r| r.handlers.len())
            .unwrap_or(0)
    }
}

/// Keeps a handler registered until dropped
pub struct Subscription {
    id: u64,
    registry: std::sync::Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(|e| e.into_inner());
            registry.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
