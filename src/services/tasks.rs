//! Task Endpoints

use serde::de::IgnoredAny;

use super::http::ApiRequest;
use super::segment;
use crate::error::ApiError;
use crate::models::{Task, TaskCompletion, TaskInput};

pub fn tasks_path(skip: u32, limit: u32) -> String {
    format!("/tasks/?skip={}&limit={}", skip, limit)
}

pub fn task_path(id: &str) -> String {
    format!("/tasks/{}", segment(id))
}

pub async fn fetch_tasks(skip: u32, limit: u32) -> Result<Vec<Task>, ApiError> {
    fetch_tasks_with(skip, limit, None).await
}

/// Same as `fetch_tasks` but cancellable through `signal`
pub async fn fetch_tasks_with(
    skip: u32,
    limit: u32,
    signal: Option<web_sys::AbortSignal>,
) -> Result<Vec<Task>, ApiError> {
    ApiRequest::get(tasks_path(skip, limit))
        .signal(signal)
        .send()
        .await
}

pub async fn create_task(input: &TaskInput) -> Result<Task, ApiError> {
    ApiRequest::post("/tasks/").json(input)?.send().await
}

pub async fn update_task(id: &str, input: &TaskInput) -> Result<Task, ApiError> {
    ApiRequest::put(task_path(id)).json(input)?.send().await
}

/// Completion checkbox; sends only the `completed` flag
pub async fn toggle_task(id: &str, completed: bool) -> Result<Task, ApiError> {
    ApiRequest::put(task_path(id))
        .json(&TaskCompletion { completed })?
        .send()
        .await
}

pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    let _: IgnoredAny = ApiRequest::delete(task_path(id)).send().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_paths() {
        assert_eq!(tasks_path(20, 10), "/tasks/?skip=20&limit=10");
        assert_eq!(task_path("t-9"), "/tasks/t-9");
    }
}
