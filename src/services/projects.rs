//! Project Endpoints

use serde::de::IgnoredAny;

use super::http::ApiRequest;
use super::segment;
use crate::error::ApiError;
use crate::models::{Project, ProjectInput, Task};

// ========================
// Paths
// ========================

pub fn projects_path(skip: u32, limit: u32) -> String {
    format!("/projects/?skip={}&limit={}", skip, limit)
}

pub fn project_path(id: &str) -> String {
    format!("/projects/{}", segment(id))
}

pub fn project_tasks_path(id: &str) -> String {
    format!("/projects/{}/tasks", segment(id))
}

// ========================
// Calls
// ========================

pub async fn fetch_projects(skip: u32, limit: u32) -> Result<Vec<Project>, ApiError> {
    fetch_projects_with(skip, limit, None).await
}

/// Same as `fetch_projects` but cancellable through `signal`
pub async fn fetch_projects_with(
    skip: u32,
    limit: u32,
    signal: Option<web_sys::AbortSignal>,
) -> Result<Vec<Project>, ApiError> {
    ApiRequest::get(projects_path(skip, limit))
        .signal(signal)
        .send()
        .await
}

pub async fn fetch_project(id: &str) -> Result<Project, ApiError> {
    ApiRequest::get(project_path(id)).send().await
}

pub async fn fetch_project_tasks(id: &str) -> Result<Vec<Task>, ApiError> {
    ApiRequest::get(project_tasks_path(id)).send().await
}

pub async fn create_project(input: &ProjectInput) -> Result<Project, ApiError> {
    ApiRequest::post("/projects/").json(input)?.send().await
}

pub async fn update_project(id: &str, input: &ProjectInput) -> Result<Project, ApiError> {
    ApiRequest::put(project_path(id)).json(input)?.send().await
}

pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    let _: IgnoredAny = ApiRequest::delete(project_path(id)).send().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths() {
        assert_eq!(projects_path(0, 100), "/projects/?skip=0&limit=100");
        assert_eq!(project_path("p-1"), "/projects/p-1");
        assert_eq!(project_tasks_path("p-1"), "/projects/p-1/tasks");
    }
}
