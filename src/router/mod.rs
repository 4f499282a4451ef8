//! Client-Side Router
//!
//! Maps URL paths to views through a regex route table. Resolution is pure;
//! the browser history glue lives in `history`.

pub mod history;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::search::Supersede;
use crate::store::NavigationState;

pub const ROOT_PATH: &str = "/";

/// Every view the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RouteId {
    #[default]
    Home,
    Projects,
    ProjectDetail,
    Tasks,
    Settings,
}

impl RouteId {
    pub fn title(self) -> &'static str {
        match self {
            RouteId::Home => "Home",
            RouteId::Projects => "Projects",
            RouteId::ProjectDetail => "Project Details",
            RouteId::Tasks => "Tasks",
            RouteId::Settings => "Settings",
        }
    }

    /// Breadcrumbs known before the view loads anything
    pub fn breadcrumbs(self) -> Vec<Breadcrumb> {
        match self {
            RouteId::Home => Vec::new(),
            RouteId::Projects | RouteId::ProjectDetail => {
                vec![Breadcrumb::new("Projects", "/projects")]
            }
            RouteId::Tasks => vec![Breadcrumb::new("Tasks", "/tasks")],
            RouteId::Settings => vec![Breadcrumb::new("Settings", "/settings")],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` renders as plain text (the current page)
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Named path captures, e.g. `id` for `/projects/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

struct Route {
    id: RouteId,
    pattern: Regex,
    param_keys: &'static [&'static str],
}

fn routes() -> &'static [Route] {
    static ROUTES: OnceLock<Vec<Route>> = OnceLock::new();
    ROUTES.get_or_init(|| {
        let table: [(RouteId, &str, &'static [&'static str]); 5] = [
            (RouteId::Home, r"^/$", &[]),
            (RouteId::Projects, r"^/projects/?$", &[]),
            (RouteId::ProjectDetail, r"^/projects/([\w-]+)/?$", &["id"]),
            (RouteId::Tasks, r"^/tasks/?$", &[]),
            (RouteId::Settings, r"^/settings/?$", &[]),
        ];
        table
            .into_iter()
            .filter_map(|(id, pattern, param_keys)| match Regex::new(pattern) {
                Ok(pattern) => Some(Route { id, pattern, param_keys }),
                Err(e) => {
                    log::error!("bad route pattern {pattern}: {e}");
                    None
                }
            })
            .collect()
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub route: RouteId,
    pub params: Params,
}

/// First route matching `path`; captures bind to the route's parameter names
/// in order
pub fn resolve(path: &str) -> Option<Resolution> {
    routes().iter().find_map(|route| {
        let caps = route.pattern.captures(path)?;
        let mut params = Params::default();
        for (key, value) in route.param_keys.iter().zip(caps.iter().skip(1)) {
            if let Some(value) = value {
                params.insert(*key, value.as_str());
            }
        }
        Some(Resolution { route: route.id, params })
    })
}

/// Strip query string and fragment so `/tasks?x=1` still matches
pub fn path_only(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    if path.is_empty() { ROOT_PATH } else { path }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavOutcome {
    pub state: NavigationState,
    /// Path was unknown and the router fell back to `/`
    pub redirected: bool,
}

/// Turns paths into navigation states, one ticket per navigation
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    generation: Supersede,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `path`; unknown paths resolve to the root view.
    ///
    /// Each call supersedes the previous navigation, so refinements started
    /// for an earlier view are rejected.
    pub fn navigate(&self, path: &str) -> NavOutcome {
        let ticket = self.generation.issue();
        let path = path_only(path);
        let (resolution, redirected) = match resolve(path) {
            Some(resolution) => (resolution, false),
            None => {
                log::warn!("no route for {path}, redirecting to {ROOT_PATH}");
                (resolve(ROOT_PATH).unwrap_or_default(), true)
            }
        };
        let view = resolution.route;
        NavOutcome {
            state: NavigationState {
                view,
                title: view.title().to_string(),
                breadcrumbs: view.breadcrumbs(),
                params: resolution.params,
                ticket: Some(ticket),
            },
            redirected,
        }
    }

    #[cfg(test)]
    pub fn is_current(&self, ticket: crate::search::Ticket) -> bool {
        self.generation.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn route_of(path: &str) -> Option<RouteId> {
        resolve(path).map(|r| r.route)
    }

    #[test]
    fn test_static_routes() {
        assert_eq!(route_of("/"), Some(RouteId::Home));
        assert_eq!(route_of("/projects"), Some(RouteId::Projects));
        assert_eq!(route_of("/tasks"), Some(RouteId::Tasks));
        assert_eq!(route_of("/settings"), Some(RouteId::Settings));
    }

    #[test]
    fn test_trailing_slash_is_optional() {
        assert_eq!(route_of("/projects/"), Some(RouteId::Projects));
        assert_eq!(route_of("/tasks/"), Some(RouteId::Tasks));
        assert_eq!(
            route_of("/projects/abc-1/"),
            Some(RouteId::ProjectDetail)
        );
    }

    #[test]
    fn test_project_detail_captures_id() {
        let resolution = resolve("/projects/6f1c-aa_9").unwrap();
        assert_eq!(resolution.route, RouteId::ProjectDetail);
        assert_eq!(resolution.params.get("id"), Some("6f1c-aa_9"));
    }

    #[test]
    fn test_unknown_paths_do_not_match() {
        assert_eq!(resolve("/nope"), None);
        assert_eq!(resolve("/projects/a/b"), None);
        assert_eq!(resolve("/projects/a.b"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_path_only_strips_query_and_fragment() {
        assert_eq!(path_only("/tasks?done=1"), "/tasks");
        assert_eq!(path_only("/projects#top"), "/projects");
        assert_eq!(path_only("?x"), "/");
    }

    #[test]
    fn test_navigate_unknown_redirects_home() {
        let nav = Navigator::new();
        let outcome = nav.navigate("/does/not/exist");
        assert!(outcome.redirected);
        assert_eq!(outcome.state.view, RouteId::Home);
        assert_eq!(outcome.state.title, "Home");
        assert!(outcome.state.breadcrumbs.is_empty());
    }

    #[test]
    fn test_navigate_sets_metadata() {
        let nav = Navigator::new();
        let outcome = nav.navigate("/projects/p1");
        assert!(!outcome.redirected);
        assert_eq!(outcome.state.title, "Project Details");
        assert_eq!(
            outcome.state.breadcrumbs,
            vec![Breadcrumb::new("Projects", "/projects")]
        );
        assert_eq!(outcome.state.params.get("id"), Some("p1"));

        let settings = nav.navigate("/settings").state;
        assert_eq!(settings.breadcrumbs, vec![Breadcrumb::new("Settings", "/settings")]);
    }

    #[test]
    fn test_later_navigation_rejects_earlier_refinement() {
        let nav = Navigator::new();
        let mut first = nav.navigate("/projects/p1").state;
        let first_ticket = first.ticket.unwrap();
        let second = nav.navigate("/tasks").state;

        assert!(!nav.is_current(first_ticket));
        assert!(nav.is_current(second.ticket.unwrap()));

        // A late refinement only lands on the state it was issued for
        let mut shown = second.clone();
        assert!(!shown.refine(first_ticket, "Alpha".into(), Vec::new()));
        assert_eq!(shown, second);
        assert!(first.refine(first_ticket, "Alpha".into(), Vec::new()));
        assert_eq!(first.title, "Alpha");
    }
}
