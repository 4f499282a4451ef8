//! Search Dialog State Machine
//!
//! Pure state for the search dialog. The component owns timers, fetches and
//! focus; this type decides what they mean. Every async completion carries
//! the `Ticket` it was started with and is dropped if a newer one exists.

use super::cancel::Ticket;
use super::engine::SearchResult;
use crate::error::ApiError;

/// Shown instead of the raw error text
pub const SEARCH_FAILED: &str = "Search failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    /// Open with an empty query; the recent list is shown
    Idle,
    Loading,
    Results,
    NoResults,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(NavKey::Up),
            "ArrowDown" => Some(NavKey::Down),
            "Enter" => Some(NavKey::Enter),
            "Escape" => Some(NavKey::Escape),
            _ => None,
        }
    }
}

/// What the component has to do after a key press
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Ignored,
    FocusInput,
    FocusItem(usize),
    Activate(SearchResult),
    Close,
}

/// What the component has to do after the query text changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Restart the debounce timer
    Debounce,
    /// Query cleared: cancel pending work and reload recent items
    ShowRecent,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogState {
    pub phase: Phase,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub recent: Vec<SearchResult>,
    pub selected: Option<usize>,
    pub error: Option<String>,
    /// Set once a search has been loading longer than the flicker delay
    pub show_spinner: bool,
    pending_search: Option<Ticket>,
    pending_recent: Option<Ticket>,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Searching (non-empty query) rather than browsing recent items
    pub fn showing_results(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// The list keyboard navigation moves over
    pub fn items(&self) -> &[SearchResult] {
        if self.showing_results() {
            &self.results
        } else {
            &self.recent
        }
    }

    /// What the list area renders. Recent items stay up while a typed query
    /// waits for its first search.
    pub fn visible_items(&self) -> &[SearchResult] {
        if self.phase == Phase::Idle {
            &self.recent
        } else {
            self.items()
        }
    }

    /// Always lands in `Idle` with nothing carried over
    pub fn open(&mut self) {
        *self = DialogState {
            phase: Phase::Idle,
            ..DialogState::default()
        };
    }

    pub fn close(&mut self) {
        *self = DialogState::default();
    }

    pub fn input(&mut self, text: &str) -> InputOutcome {
        self.query = text.to_string();
        self.selected = None;
        // Whatever was in flight belongs to an older query now
        self.pending_search = None;
        if self.showing_results() {
            InputOutcome::Debounce
        } else {
            self.phase = Phase::Idle;
            self.results.clear();
            self.error = None;
            self.show_spinner = false;
            InputOutcome::ShowRecent
        }
    }

    /// Debounce fired. Prior results stay visible while loading.
    pub fn begin_search(&mut self, ticket: Ticket) {
        if !self.is_open() || !self.showing_results() {
            return;
        }
        self.pending_search = Some(ticket);
        self.phase = Phase::Loading;
        self.error = None;
        self.show_spinner = false;
    }

    /// Only switch to the loading indicator when there is nothing to show
    pub fn loading_delay_elapsed(&mut self, ticket: Ticket) {
        if self.pending_search == Some(ticket) && self.phase == Phase::Loading && self.results.is_empty() {
            self.show_spinner = true;
        }
    }

    /// Apply a finished search. Returns false when the result was stale.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<Vec<SearchResult>, ApiError>) -> bool {
        if self.pending_search != Some(ticket) {
            return false;
        }
        self.pending_search = None;
        self.show_spinner = false;
        match outcome {
            Ok(results) if results.is_empty() => {
                self.results = results;
                self.selected = None;
                self.phase = Phase::NoResults;
            }
            Ok(results) => {
                self.results = results;
                self.selected = Some(0);
                self.phase = Phase::Results;
            }
            Err(ApiError::Aborted) => {
                // Cancellation is not a failure; leave the state alone
                return false;
            }
            Err(_) => {
                self.results.clear();
                self.selected = None;
                self.error = Some(SEARCH_FAILED.to_string());
                self.phase = Phase::Error;
            }
        }
        true
    }

    pub fn begin_recent(&mut self, ticket: Ticket) {
        self.pending_recent = Some(ticket);
    }

    /// Apply a finished recent-items load; failures leave an empty list
    pub fn recent_loaded(&mut self, ticket: Ticket, outcome: Result<Vec<SearchResult>, ApiError>) -> bool {
        if self.pending_recent != Some(ticket) || !self.is_open() {
            return false;
        }
        self.pending_recent = None;
        match outcome {
            Ok(items) => self.recent = items,
            Err(ApiError::Aborted) => return false,
            Err(_) => self.recent.clear(),
        }
        true
    }

    pub fn hover(&mut self, index: usize) {
        if index < self.items().len() {
            self.selected = Some(index);
        }
    }

    /// Keyboard handling. `from_input` is true when the query field has focus.
    pub fn key(&mut self, key: NavKey, from_input: bool) -> KeyOutcome {
        if key == NavKey::Escape {
            return KeyOutcome::Close;
        }
        let len = self.items().len();
        if len == 0 {
            return KeyOutcome::Ignored;
        }
        match key {
            NavKey::Down => match self.selected {
                Some(_) if from_input => self.select(0),
                None => self.select(0),
                Some(i) if i + 1 < len => self.select(i + 1),
                Some(_) => KeyOutcome::Ignored,
            },
            NavKey::Up => match self.selected {
                Some(i) if i > 0 => self.select(i - 1),
                _ => {
                    self.selected = None;
                    KeyOutcome::FocusInput
                }
            },
            NavKey::Enter => {
                let index = self.selected.filter(|i| *i < len).unwrap_or(0);
                KeyOutcome::Activate(self.items()[index].clone())
            }
            NavKey::Escape => KeyOutcome::Close,
        }
    }

    fn select(&mut self, index: usize) -> KeyOutcome {
        self.selected = Some(index);
        KeyOutcome::FocusItem(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::cancel::Supersede;
    use crate::search::engine::{MatchType, ResultKind};
    use pretty_assertions::assert_eq;

    fn hit(id: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            kind: ResultKind::Project,
            title: format!("Project {}", id),
            subtitle: None,
            project_id: None,
            match_type: MatchType::Title,
            score: 2,
        }
    }

    fn open_with_query(query: &str) -> DialogState {
        let mut state = DialogState::default();
        state.open();
        assert_eq!(state.input(query), InputOutcome::Debounce);
        state
    }

    #[test]
    fn test_open_resets_to_idle() {
        let gen = Supersede::new();
        let mut state = open_with_query("alpha");
        let t = gen.issue();
        state.begin_search(t);
        state.finish(t, Ok(vec![hit("1")]));

        state.close();
        state.open();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.query, "");
        assert!(state.results.is_empty());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_results_select_first() {
        let gen = Supersede::new();
        let mut state = open_with_query("alpha");
        let t = gen.issue();
        state.begin_search(t);
        assert_eq!(state.phase, Phase::Loading);
        assert!(state.finish(t, Ok(vec![hit("1"), hit("2")])));
        assert_eq!(state.phase, Phase::Results);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_empty_results() {
        let gen = Supersede::new();
        let mut state = open_with_query("zzz");
        let t = gen.issue();
        state.begin_search(t);
        state.finish(t, Ok(vec![]));
        assert_eq!(state.phase, Phase::NoResults);
        assert_eq!(state.key(NavKey::Down, true), KeyOutcome::Ignored);
    }

    #[test]
    fn test_stale_search_never_overwrites_newer() {
        let gen = Supersede::new();
        let mut state = open_with_query("a");
        let ticket_a = gen.issue();
        state.begin_search(ticket_a);

        state.input("b");
        let ticket_b = gen.issue();
        state.begin_search(ticket_b);

        assert!(state.finish(ticket_b, Ok(vec![hit("b")])));
        assert!(!state.finish(ticket_a, Ok(vec![hit("a")])));
        assert_eq!(state.results, vec![hit("b")]);
    }

    #[test]
    fn test_typing_invalidates_in_flight_search() {
        let gen = Supersede::new();
        let mut state = open_with_query("alp");
        let t = gen.issue();
        state.begin_search(t);
        state.input("alpha");
        assert!(!state.finish(t, Ok(vec![hit("1")])));
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_loading_keeps_previous_results_without_spinner() {
        let gen = Supersede::new();
        let mut state = open_with_query("alp");
        let first = gen.issue();
        state.begin_search(first);
        state.finish(first, Ok(vec![hit("1")]));

        state.input("alpha");
        let second = gen.issue();
        state.begin_search(second);
        state.loading_delay_elapsed(second);
        assert_eq!(state.phase, Phase::Loading);
        assert_eq!(state.results, vec![hit("1")]);
        assert!(!state.show_spinner);
    }

    #[test]
    fn test_spinner_only_without_prior_results() {
        let gen = Supersede::new();
        let mut state = open_with_query("alpha");
        let t = gen.issue();
        state.begin_search(t);
        state.loading_delay_elapsed(t);
        assert!(state.show_spinner);
        state.finish(t, Ok(vec![hit("1")]));
        assert!(!state.show_spinner);
    }

    #[test]
    fn test_failure_clears_results_and_sets_error() {
        let gen = Supersede::new();
        let mut state = open_with_query("alp");
        let first = gen.issue();
        state.begin_search(first);
        state.finish(first, Ok(vec![hit("1")]));

        state.input("alpha");
        let second = gen.issue();
        state.begin_search(second);
        state.finish(second, Err(ApiError::Network("offline".into())));
        assert_eq!(state.phase, Phase::Error);
        assert!(state.results.is_empty());
        assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED));
    }

    #[test]
    fn test_abort_is_not_an_error() {
        let gen = Supersede::new();
        let mut state = open_with_query("alpha");
        let t = gen.issue();
        state.begin_search(t);
        assert!(!state.finish(t, Err(ApiError::Aborted)));
        assert_eq!(state.error, None);
        assert_ne!(state.phase, Phase::Error);
    }

    #[test]
    fn test_clearing_query_returns_to_idle() {
        let gen = Supersede::new();
        let mut state = open_with_query("alpha");
        let t = gen.issue();
        state.begin_search(t);
        state.finish(t, Ok(vec![hit("1")]));
        assert_eq!(state.input("   "), InputOutcome::ShowRecent);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_recent_items_and_stale_recent_load() {
        let gen = Supersede::new();
        let mut state = DialogState::default();
        state.open();
        let old = gen.issue();
        state.begin_recent(old);
        let new = gen.issue();
        state.begin_recent(new);
        assert!(!state.recent_loaded(old, Ok(vec![hit("old")])));
        assert!(state.recent_loaded(new, Ok(vec![hit("r1"), hit("r2")])));
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn test_recent_stay_visible_until_first_search_starts() {
        let gen = Supersede::new();
        let mut state = DialogState::default();
        state.open();
        let recent = gen.issue();
        state.begin_recent(recent);
        state.recent_loaded(recent, Ok(vec![hit("r1")]));

        assert_eq!(state.input("al"), InputOutcome::Debounce);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.visible_items().to_vec(), vec![hit("r1")]);
        // Keys wait for the search instead of acting on the recent list
        assert_eq!(state.key(NavKey::Enter, true), KeyOutcome::Ignored);

        let t = gen.issue();
        state.begin_search(t);
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn test_down_from_input_with_single_result() {
        let gen = Supersede::new();
        let mut state = open_with_query("alpha");
        let t = gen.issue();
        state.begin_search(t);
        state.finish(t, Ok(vec![hit("1")]));

        assert_eq!(state.key(NavKey::Down, true), KeyOutcome::FocusItem(0));
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.key(NavKey::Down, false), KeyOutcome::Ignored);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_up_and_down_walk_the_list() {
        let mut state = DialogState::default();
        state.open();
        state.recent = vec![hit("1"), hit("2"), hit("3")];

        assert_eq!(state.key(NavKey::Down, true), KeyOutcome::FocusItem(0));
        assert_eq!(state.key(NavKey::Down, false), KeyOutcome::FocusItem(1));
        assert_eq!(state.key(NavKey::Down, false), KeyOutcome::FocusItem(2));
        assert_eq!(state.key(NavKey::Down, false), KeyOutcome::Ignored);
        assert_eq!(state.key(NavKey::Up, false), KeyOutcome::FocusItem(1));
        assert_eq!(state.key(NavKey::Up, false), KeyOutcome::FocusItem(0));
        assert_eq!(state.key(NavKey::Up, false), KeyOutcome::FocusInput);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_enter_activates_selected_or_first() {
        let mut state = DialogState::default();
        state.open();
        state.recent = vec![hit("1"), hit("2")];
        assert_eq!(state.key(NavKey::Enter, true), KeyOutcome::Activate(hit("1")));
        state.hover(1);
        assert_eq!(state.key(NavKey::Enter, false), KeyOutcome::Activate(hit("2")));
    }

    #[test]
    fn test_escape_always_closes() {
        let mut state = DialogState::default();
        state.open();
        assert_eq!(state.key(NavKey::Escape, true), KeyOutcome::Close);
    }

    #[test]
    fn test_nav_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Down));
        assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key("a"), None);
    }
}
