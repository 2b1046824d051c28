//! Fetch Transport
//!
//! Thin `window.fetch` wrapper: JSON in, JSON out.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

fn js_error(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}

/// Issue a request and decode the JSON body.
///
/// The body is decoded whatever the status code: error statuses still carry
/// a `{success: false, error}` envelope.
pub async fn send<T: DeserializeOwned>(method: Method, url: &str, body: Option<String>) -> ApiResult<T> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method.as_str());
    if let Some(json) = body.as_deref() {
        init.set_body(&JsValue::from_str(json));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(|e| ApiError::Request(js_error(e)))?;
    if method != Method::Get {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Request(js_error(e)))?;
    }

    tracing::debug!(method = method.as_str(), %url, "sending request");

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_error(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        tracing::debug!(status = response.status(), %url, "non-success status");
    }

    let json = response.json().map_err(|e| ApiError::Decode(js_error(e)))?;
    let json = JsFuture::from(json).await.map_err(|e| ApiError::Decode(js_error(e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}
