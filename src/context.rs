//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::events::{AppEvent, EventBus, Subscription};
use crate::models::{Project, Task};
use crate::router::history;

/// What the project dialog is editing
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectForm {
    New,
    Edit(Project),
}

/// What the task dialog is editing
#[derive(Debug, Clone, PartialEq)]
pub enum TaskForm {
    New { project_id: Option<String> },
    Edit(Task),
}

impl TaskForm {
    pub fn project_id(&self) -> Option<String> {
        match self {
            TaskForm::New { project_id } => project_id.clone(),
            TaskForm::Edit(task) => task.project_id.clone(),
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    bus: StoredValue<EventBus>,
    /// Open project dialog (None = closed)
    pub project_form: RwSignal<Option<ProjectForm>>,
    /// Open task dialog (None = closed)
    pub task_form: RwSignal<Option<TaskForm>>,
    pub search_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus: StoredValue::new(bus),
            project_form: RwSignal::new(None),
            task_form: RwSignal::new(None),
            search_open: RwSignal::new(false),
        }
    }

    pub fn publish(&self, event: AppEvent) {
        // Clone out so handlers can reach the context while running
        let bus = self.bus.get_value();
        bus.publish(event);
    }

    pub fn subscribe(&self, handler: impl Fn(&AppEvent) + Send + Sync + 'static) -> Subscription {
        self.bus.with_value(|bus| bus.subscribe(handler))
    }

    /// Subscribe for as long as the calling component is mounted
    pub fn subscribe_scoped(&self, handler: impl Fn(&AppEvent) + Send + Sync + 'static) {
        let subscription = self.subscribe(handler);
        on_cleanup(move || drop(subscription));
    }

    /// Record `path` in history and let the router pick it up
    pub fn navigate(&self, path: &str) {
        history::push(path);
        self.publish(AppEvent::Navigated);
    }

    pub fn open_project_form(&self, project: Option<Project>) {
        self.project_form
            .set(Some(project.map_or(ProjectForm::New, ProjectForm::Edit)));
    }

    pub fn open_task_form(&self, form: TaskForm) {
        self.task_form.set(Some(form));
    }

    pub fn open_search(&self) {
        self.search_open.set(true);
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
