//! Project Endpoints

use crate::forms::ProjectPayload;
use crate::models::Project;

use super::{encode, http, ApiClient, ApiResult, Method};

impl ApiClient {
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        http::send(Method::Get, &self.url("/api/projects"), None).await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> ApiResult<()> {
        let body = encode(payload)?;
        self.mutate(Method::Post, "/api/projects", Some(body)).await
    }

    pub async fn delete_project(&self, project_id: &str) -> ApiResult<()> {
        self.mutate(Method::Delete, &format!("/api/projects/{}/delete", project_id), None)
            .await
    }
}
