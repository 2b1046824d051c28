//! REST API Bindings
//!
//! Typed wrappers over the Focus server's JSON endpoints, organized by domain.

mod http;
mod capture;
mod task;
mod project;
mod suggestion;

use std::fmt;

use crate::models::MutationResponse;

use http::Method;
pub use task::TaskToggle;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Request failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Not running in a browser window
    NoWindow,
    /// The request could not be built or its body encoded
    Request(String),
    /// fetch rejected (offline, CORS, aborted)
    Network(String),
    /// The response body was not the expected JSON
    Decode(String),
    /// The server answered `{success: false}`, possibly with an error text
    Rejected(Option<String>),
}

impl ApiError {
    /// Error text supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(Some(msg)) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NoWindow => write!(f, "No browser window"),
            ApiError::Request(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ApiError::Rejected(Some(msg)) => write!(f, "Rejected: {}", msg),
            ApiError::Rejected(None) => write!(f, "Rejected by server"),
        }
    }
}

impl std::error::Error for ApiError {}

impl MutationResponse {
    pub fn into_result(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.error))
        }
    }
}

/// Client for the Focus REST API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Send a request whose answer is a `{success, error?}` envelope
    async fn mutate(&self, method: Method, path: &str, body: Option<String>) -> ApiResult<()> {
        let response: MutationResponse = http::send(method, &self.url(path), body).await?;
        response.into_result()
    }
}

fn encode<T: serde::Serialize>(payload: &T) -> ApiResult<String> {
    serde_json::to_string(payload).map_err(|e| ApiError::Request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_is_ok() {
        let response = MutationResponse { success: true, ..Default::default() };
        assert_eq!(response.into_result(), Ok(()));
    }

    #[test]
    fn test_failure_envelope_carries_server_error() {
        let response = MutationResponse {
            success: false,
            error: Some("Task not found".to_string()),
        };
        let err = response.into_result().unwrap_err();
        assert_eq!(err.server_message(), Some("Task not found"));
        assert_eq!(err.to_string(), "Rejected: Task not found");
    }

    #[test]
    fn test_network_errors_have_no_server_message() {
        assert_eq!(ApiError::Network("offline".into()).server_message(), None);
        assert_eq!(ApiError::Rejected(None).server_message(), None);
    }

    #[test]
    fn test_urls_join_base_and_path() {
        assert_eq!(ApiClient::default().url("/api/projects"), "/api/projects");
        assert_eq!(
            ApiClient::new("https://focus.example").url("/api/projects"),
            "https://focus.example/api/projects"
        );
    }
}
