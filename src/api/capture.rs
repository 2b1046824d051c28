//! Quick Capture Endpoints

use crate::forms::CapturePayload;

use super::{encode, ApiClient, ApiResult, Method};

impl ApiClient {
    /// POST a quick-capture payload to its `/api/{kind}/quick-add` endpoint
    pub async fn quick_add<P: CapturePayload>(&self, payload: &P) -> ApiResult<()> {
        let body = encode(payload)?;
        self.mutate(Method::Post, P::ENDPOINT, Some(body)).await
    }
}
