//! Smart Suggestion Endpoint

use crate::models::Suggestion;

use super::{http, ApiClient, ApiResult, Method};

impl ApiClient {
    /// Server-ranked open tasks, best first
    pub async fn smart_suggestions(&self) -> ApiResult<Vec<Suggestion>> {
        http::send(Method::Get, &self.url("/api/smart-suggestions"), None).await
    }
}
