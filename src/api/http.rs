//! Browser transport on top of `gloo-net`

use super::{ApiRequest, Method, Transport};
use crate::config::ApiConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

/// Fetch-based transport bound to one API base URL
#[derive(Debug, Clone)]
pub struct GlooTransport {
    config: ApiConfig,
}

impl GlooTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
        .header("Accept", "application/json");

        match &request.bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let builder = self.builder(&request);

        let resp = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Serialize(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<Value>().await.ok();
            tracing::warn!(status, path = %request.path, "api request failed");
            return Err(ApiError::from_status(status, body.as_ref()));
        }

        read_body(resp).await
    }
}

/// Decode a successful response; an empty body reads as `null`
async fn read_body(resp: Response) -> Result<Value, ApiError> {
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
