//! HTTP Request Wrapper
//!
//! Single entry point for backend calls: builds the URL from the configured
//! API root, merges headers, maps failures to `ApiError` and decodes JSON.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::error::ApiError;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Request body
pub enum Body {
    Empty,
    Json(String),
    /// Multipart upload; the browser supplies the boundary header
    Form(web_sys::FormData),
}

/// A backend call under construction
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Body,
    headers: Vec<(String, String)>,
    signal: Option<web_sys::AbortSignal>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Body::Empty,
            headers: Vec::new(),
            signal: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        let text = serde_json::to_string(payload)
            .map_err(|e| ApiError::Decode(format!("cannot encode request: {}", e)))?;
        self.body = Body::Json(text);
        Ok(self)
    }

    pub fn form(mut self, form: web_sys::FormData) -> Self {
        self.body = Body::Form(form);
        self
    }

    /// Override (or add) a header; later calls win
    #[cfg(test)]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn signal(mut self, signal: Option<web_sys::AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn url(&self) -> String {
        join_url(&config::current().api_root, &self.path)
    }

    /// Defaults merged with caller overrides
    pub fn effective_headers(&self) -> Vec<(String, String)> {
        let defaults: &[(&str, &str)] = match self.body {
            Body::Form(_) => &[],
            _ => &[(CONTENT_TYPE, JSON_MIME)],
        };
        merge_headers(defaults, &self.headers)
    }

    /// Issue the request and decode the JSON response
    pub async fn send<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let url = self.url();
        let method = self.method;
        let (status, text) = self.fetch().await.map_err(|e| {
            if !e.is_aborted() {
                log::warn!("{} {} failed: {}", method.as_str(), url, e);
            }
            e
        })?;
        log::debug!("{} {} -> {}", method.as_str(), url, status);
        decode_response(status, &text)
    }

    async fn fetch(self) -> Result<(u16, String), ApiError> {
        let url = self.url();
        let mut builder = match self.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in self.effective_headers() {
            builder = builder.header(&name, &value);
        }
        let builder = builder.abort_signal(self.signal.as_ref());

        let request = match self.body {
            Body::Empty => builder.build()?,
            Body::Json(text) => builder.body(text)?,
            Body::Form(form) => builder.body(form)?,
        };
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

/// `api_root` + `path` without doubling or dropping the slash
pub fn join_url(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", root, path)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Case-insensitive merge; an override replaces the default of the same name
pub fn merge_headers(defaults: &[(&str, &str)], overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (name, value) in overrides {
        match merged.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            Some(existing) => existing.1 = value.clone(),
            None => merged.push((name.clone(), value.clone())),
        }
    }
    merged
}

/// Map status + body text to a typed result.
///
/// Non-2xx is an error carrying the body; 204 decodes as JSON `null`.
pub fn decode_response<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            body: text.to_string(),
        });
    }
    if status == 204 || text.trim().is_empty() {
        return Ok(T::deserialize(serde_json::Value::Null)?);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::de::IgnoredAny;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/api", "/projects/"), "/api/projects/");
        assert_eq!(join_url("/api/", "/tasks/1"), "/api/tasks/1");
        assert_eq!(join_url("http://host:8000/api", "admin/export/"), "http://host:8000/api/admin/export/");
    }

    #[test]
    fn test_json_requests_get_default_content_type() {
        let req = ApiRequest::post("/projects/");
        assert_eq!(
            req.effective_headers(),
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_request_header_override() {
        let req = ApiRequest::get("/projects/").header("content-type", "text/csv");
        assert_eq!(
            req.effective_headers(),
            vec![("Content-Type".to_string(), "text/csv".to_string())]
        );
    }

    #[test]
    fn test_overrides_replace_defaults_case_insensitively() {
        let merged = merge_headers(
            &[("Content-Type", "application/json")],
            &[
                ("content-type".to_string(), "text/plain".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ],
        );
        assert_eq!(
            merged,
            vec![
                ("Content-Type".to_string(), "text/plain".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_2xx_carries_status_and_body() {
        let err = decode_response::<IgnoredAny>(422, "name required").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 422,
                body: "name required".to_string()
            }
        );
    }

    #[test]
    fn test_204_yields_nothing() {
        decode_response::<()>(204, "").unwrap();
        let none: Option<Vec<String>> = decode_response(204, "").unwrap();
        assert_eq!(none, None);
    }

    #[test]
    fn test_success_body_is_json() {
        let names: Vec<String> = decode_response(200, r#"["a.csv","b.csv"]"#).unwrap();
        assert_eq!(names, vec!["a.csv", "b.csv"]);

        let err = decode_response::<Vec<String>>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
