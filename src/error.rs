//! Client Error Types

use wasm_bindgen::{JsCast, JsValue};

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure, no response at all
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status
    #[error("API {status}: {body}")]
    Http { status: u16, body: String },
    /// 2xx response whose body is not the JSON we expected
    #[error("invalid response: {0}")]
    Decode(String),
    /// Cancelled through an abort signal; never shown to the user
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }

    /// Named JS exception; `AbortError` means the caller cancelled
    fn from_exception(name: &str, message: String) -> Self {
        if name == "AbortError" {
            ApiError::Aborted
        } else {
            ApiError::Network(message)
        }
    }

    /// Classify a thrown JS value
    pub fn from_js(err: JsValue) -> Self {
        if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
            return Self::from_exception(&dom.name(), dom.message());
        }
        if let Some(e) = err.dyn_ref::<js_sys::Error>() {
            return ApiError::Network(String::from(e.message()));
        }
        ApiError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::JsError(js) => Self::from_exception(&js.name, js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            gloo_net::Error::GlooError(msg) => ApiError::Network(msg),
            #[allow(unreachable_patterns)]
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status_and_body() {
        let err = ApiError::Http {
            status: 404,
            body: r#"{"detail":"Project not found"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"API 404: {"detail":"Project not found"}"#);
        assert!(!err.is_aborted());
    }

    #[test]
    fn test_aborted_is_distinguishable() {
        assert!(ApiError::Aborted.is_aborted());
        assert!(!ApiError::Network("offline".into()).is_aborted());
    }

    #[test]
    fn test_abort_exception_maps_to_aborted() {
        assert_eq!(
            ApiError::from_exception("AbortError", "The user aborted a request.".into()),
            ApiError::Aborted
        );
        assert_eq!(
            ApiError::from_exception("TypeError", "Failed to fetch".into()),
            ApiError::Network("Failed to fetch".into())
        );
    }

    #[test]
    fn test_http_client_errors() {
        let err: ApiError = gloo_net::Error::GlooError("no window".into()).into();
        assert_eq!(err, ApiError::Network("no window".into()));

        let bad_json = serde_json::from_str::<u8>("x").unwrap_err();
        let err: ApiError = gloo_net::Error::SerdeError(bad_json).into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
