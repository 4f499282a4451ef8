//! Search Data Loading
//!
//! Fetches both collections and hands them to the in-memory engine.

use crate::config;
use crate::error::ApiError;
use crate::search::{recent_items, search, SearchQuery, SearchResult};

use super::{fetch_projects_with, fetch_tasks_with};

/// Run `query` against the current projects and tasks.
///
/// Queries below the configured minimum length return nothing without a
/// request. `signal` aborts both fetches.
pub async fn search_all(
    query: &SearchQuery,
    signal: Option<web_sys::AbortSignal>,
) -> Result<Vec<SearchResult>, ApiError> {
    let cfg = config::current();
    if !query.is_searchable(cfg.min_query_len) {
        return Ok(Vec::new());
    }
    let projects = fetch_projects_with(0, cfg.page_size, signal.clone()).await?;
    let tasks = fetch_tasks_with(0, cfg.page_size, signal).await?;
    let results = search(query, &projects, &tasks);
    log::debug!("query {:?}: {} results", query.raw(), results.len());
    Ok(results)
}

/// Most recently updated projects and tasks for the empty dialog
pub async fn load_recent(signal: Option<web_sys::AbortSignal>) -> Result<Vec<SearchResult>, ApiError> {
    let cfg = config::current();
    let projects = fetch_projects_with(0, cfg.page_size, signal.clone()).await?;
    let tasks = fetch_tasks_with(0, cfg.page_size, signal).await?;
    Ok(recent_items(&projects, &tasks, cfg.recent_items))
}
