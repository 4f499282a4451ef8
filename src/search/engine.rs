//! In-memory Search
//!
//! Multi-term matching over projects and tasks. A record matches when every
//! query term is found in its title, or every term is found in its
//! description. Terms spread over both fields do not count.

use std::cmp::Ordering;

use crate::models::{Project, Task};

/// Hard cap on returned results
pub const MAX_RESULTS: usize = 20;

const TITLE_SCORE: u8 = 2;
const DESCRIPTION_SCORE: u8 = 1;

/// Raw query text plus its lowercase terms
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    raw: String,
    terms: Vec<String>,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            terms: raw.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Has terms and is at least `min_len` characters once trimmed
    pub fn is_searchable(&self, min_len: usize) -> bool {
        !self.is_empty() && self.raw.trim().chars().count() >= min_len
    }
}

/// Ordering matters: projects sort before tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResultKind {
    Project,
    Task,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Title,
    Description,
    /// Not a search hit; an entry of the recently-updated list
    Recent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub kind: ResultKind,
    pub title: String,
    pub subtitle: Option<String>,
    /// Parent project of a task hit
    pub project_id: Option<String>,
    pub match_type: MatchType,
    pub score: u8,
}

impl SearchResult {
    fn from_project(project: &Project, match_type: MatchType, score: u8) -> Self {
        Self {
            id: project.id.clone(),
            kind: ResultKind::Project,
            title: project.name.clone(),
            subtitle: project.description.clone(),
            project_id: None,
            match_type,
            score,
        }
    }

    fn from_task(task: &Task, match_type: MatchType, score: u8) -> Self {
        Self {
            id: task.id.clone(),
            kind: ResultKind::Task,
            title: task.title.clone(),
            subtitle: task.description.clone(),
            project_id: task.project_id.clone(),
            match_type,
            score,
        }
    }

    /// Where activating this entry navigates to
    pub fn href(&self) -> String {
        match (self.kind, &self.project_id) {
            (ResultKind::Project, _) => format!("/projects/{}", self.id),
            (ResultKind::Task, Some(project_id)) => format!("/projects/{}", project_id),
            (ResultKind::Task, None) => "/tasks".to_string(),
        }
    }
}

fn all_terms_in(terms: &[String], field: &str) -> bool {
    let field = field.to_lowercase();
    terms.iter().all(|term| field.contains(term.as_str()))
}

/// Title beats description; `None` when neither field holds every term
fn classify(terms: &[String], title: &str, description: Option<&str>) -> Option<(MatchType, u8)> {
    if all_terms_in(terms, title) {
        return Some((MatchType::Title, TITLE_SCORE));
    }
    match description {
        Some(desc) if all_terms_in(terms, desc) => Some((MatchType::Description, DESCRIPTION_SCORE)),
        _ => None,
    }
}

/// Score descending, projects first, then title and id for a stable order
fn compare(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.kind.cmp(&b.kind))
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rank every matching project and task, capped at `MAX_RESULTS`
pub fn search(query: &SearchQuery, projects: &[Project], tasks: &[Task]) -> Vec<SearchResult> {
    let terms = query.terms();
    if terms.is_empty() {
        return Vec::new();
    }

    let project_hits = projects.iter().filter_map(|p| {
        classify(terms, &p.name, p.description.as_deref())
            .map(|(match_type, score)| SearchResult::from_project(p, match_type, score))
    });
    let task_hits = tasks.iter().filter_map(|t| {
        classify(terms, &t.title, t.description.as_deref())
            .map(|(match_type, score)| SearchResult::from_task(t, match_type, score))
    });

    let mut results: Vec<SearchResult> = project_hits.chain(task_hits).collect();
    results.sort_by(compare);
    results.truncate(MAX_RESULTS);
    results
}

/// The `limit` most recently updated records of both kinds, newest first
pub fn recent_items(projects: &[Project], tasks: &[Task], limit: usize) -> Vec<SearchResult> {
    let mut dated: Vec<_> = projects
        .iter()
        .map(|p| (p.updated_at, SearchResult::from_project(p, MatchType::Recent, 0)))
        .chain(
            tasks
                .iter()
                .map(|t| (t.updated_at, SearchResult::from_task(t, MatchType::Recent, 0))),
        )
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().take(limit).map(|(_, item)| item).collect()
}

/// A run of display text, marked when it matched a query term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// Split `text` so that every case-insensitive occurrence of a term is its
/// own highlighted segment. Overlapping matches are merged.
pub fn highlight(text: &str, query: &SearchQuery) -> Vec<Segment> {
    // Lowercasing can change byte lengths, so keep a map from each lowered
    // byte back to the original char's byte range
    let mut lowered = String::with_capacity(text.len());
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for lc in ch.to_lowercase() {
            lowered.push(lc);
            origin.extend(std::iter::repeat((start, end)).take(lc.len_utf8()));
        }
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for term in query.terms() {
        for (pos, matched) in lowered.match_indices(term.as_str()) {
            let start = origin[pos].0;
            let end = origin[pos + matched.len() - 1].1;
            ranges.push((start, end));
        }
    }
    ranges.sort();

    let mut merged: Vec<(usize, usize)> = Vec::new();
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end) in merged {
        if start > cursor {
            segments.push(Segment { text: text[cursor..start].to_string(), highlighted: false });
        }
        segments.push(Segment { text: text[start..end].to_string(), highlighted: true });
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(Segment { text: text[cursor..].to_string(), highlighted: false });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn project(id: &str, name: &str, description: Option<&str>, age_minutes: i64) -> Project {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: base - Duration::days(30),
            updated_at: base - Duration::minutes(age_minutes),
        }
    }

    fn task(id: &str, title: &str, description: Option<&str>, project_id: Option<&str>, age_minutes: i64) -> Task {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            completed: false,
            project_id: project_id.map(str::to_string),
            created_at: base - Duration::days(30),
            updated_at: base - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn test_parse_lowercases_and_splits() {
        let q = SearchQuery::parse("  Proj   ALPHA ");
        assert_eq!(q.terms(), &["proj".to_string(), "alpha".to_string()]);
        assert!(SearchQuery::parse("   ").is_empty());
    }

    #[test]
    fn test_is_searchable_respects_min_len() {
        assert!(!SearchQuery::parse("a").is_searchable(2));
        assert!(SearchQuery::parse(" ab ").is_searchable(2));
        assert!(!SearchQuery::parse("").is_searchable(0));
    }

    #[test]
    fn test_all_terms_in_title() {
        let projects = vec![
            project("p1", "Alpha Project", None, 0),
            project("p2", "Beta", None, 0),
        ];
        let results = search(&SearchQuery::parse("proj alpha"), &projects, &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Alpha Project");
        assert_eq!(results[0].score, 2);
        assert_eq!(results[0].match_type, MatchType::Title);
    }

    #[test]
    fn test_terms_split_across_fields_do_not_match() {
        let projects = vec![project("p1", "Alpha", Some("release notes"), 0)];
        assert!(search(&SearchQuery::parse("alpha release"), &projects, &[]).is_empty());
    }

    #[test]
    fn test_description_match_scores_lower_and_sorts_after() {
        let projects = vec![project("p1", "Website", Some("launch checklist"), 0)];
        let tasks = vec![task("t1", "Launch party", None, None, 0)];
        let results = search(&SearchQuery::parse("launch"), &projects, &tasks);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "t1");
        assert_eq!(results[0].score, 2);
        assert_eq!(results[1].id, "p1");
        assert_eq!(results[1].match_type, MatchType::Description);
        assert_eq!(results[1].score, 1);
    }

    #[test]
    fn test_projects_before_tasks_then_alphabetical() {
        let projects = vec![project("p2", "report zeta", None, 0), project("p1", "Report alpha", None, 0)];
        let tasks = vec![task("t1", "a report", None, None, 0)];
        let results = search(&SearchQuery::parse("report"), &projects, &tasks);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "t1"]);
    }

    #[test]
    fn test_every_result_holds_all_terms_in_one_field() {
        let tasks: Vec<Task> = (0..10)
            .map(|i| {
                task(
                    &format!("t{}", i),
                    if i % 2 == 0 { "Fix login bug" } else { "Fix signup" },
                    if i % 3 == 0 { Some("the login form is broken") } else { None },
                    None,
                    i,
                )
            })
            .collect();
        let query = SearchQuery::parse("LOGIN fix");
        for result in search(&query, &[], &tasks) {
            let in_title = query.terms().iter().all(|t| result.title.to_lowercase().contains(t.as_str()));
            let in_desc = result
                .subtitle
                .as_deref()
                .map(|d| query.terms().iter().all(|t| d.to_lowercase().contains(t.as_str())))
                .unwrap_or(false);
            assert!(in_title || in_desc, "{:?}", result);
        }
    }

    #[test]
    fn test_results_capped() {
        let tasks: Vec<Task> = (0..50)
            .map(|i| task(&format!("t{:02}", i), "write tests", None, None, i))
            .collect();
        assert_eq!(search(&SearchQuery::parse("tests"), &[], &tasks).len(), MAX_RESULTS);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let projects = vec![project("p1", "Alpha", None, 0)];
        assert!(search(&SearchQuery::parse(""), &projects, &[]).is_empty());
    }

    #[test]
    fn test_recent_items_merge_and_sort_by_update() {
        let projects = vec![
            project("p1", "Old project", None, 600),
            project("p2", "Fresh project", None, 1),
            project("p3", "Middle project", None, 30),
        ];
        let tasks = vec![
            task("t1", "Newest task", None, Some("p1"), 0),
            task("t2", "Stale task", None, None, 900),
            task("t3", "Recent task", None, None, 10),
            task("t4", "Older task", None, None, 60),
        ];
        let recent = recent_items(&projects, &tasks, 5);
        let ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "p2", "t3", "p3", "t4"]);
        assert!(recent.iter().all(|r| r.match_type == MatchType::Recent));
    }

    #[test]
    fn test_href_targets() {
        let p = SearchResult::from_project(&project("p1", "A", None, 0), MatchType::Title, 2);
        assert_eq!(p.href(), "/projects/p1");
        let child = SearchResult::from_task(&task("t1", "A", None, Some("p9"), 0), MatchType::Title, 2);
        assert_eq!(child.href(), "/projects/p9");
        let orphan = SearchResult::from_task(&task("t2", "A", None, None, 0), MatchType::Title, 2);
        assert_eq!(orphan.href(), "/tasks");
    }

    #[test]
    fn test_highlight_marks_each_term() {
        let segments = highlight("Alpha Project", &SearchQuery::parse("proj alpha"));
        assert_eq!(
            segments,
            vec![
                Segment { text: "Alpha".into(), highlighted: true },
                Segment { text: " ".into(), highlighted: false },
                Segment { text: "Proj".into(), highlighted: true },
                Segment { text: "ect".into(), highlighted: false },
            ]
        );
    }

    #[test]
    fn test_highlight_merges_overlaps_and_handles_unicode() {
        let segments = highlight("ÉCOLE école", &SearchQuery::parse("éco col"));
        let marked: Vec<&str> = segments.iter().filter(|s| s.highlighted).map(|s| s.text.as_str()).collect();
        assert_eq!(marked, vec!["ÉCOL", "écol"]);
    }
}
