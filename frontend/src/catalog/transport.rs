use crate::catalog::wire::ErrorResponse;
use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

/// Why a catalog request produced nothing. None of these reach the view: the
/// client logs them and substitutes an empty list or an absent record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("no matching items")]
    Empty,
}

/// Issues a GET and hands back the decoded JSON body.
#[async_trait(?Send)]
pub trait Transport {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;
}

/// Browser `fetch` via gloo-net.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            // Try the platform's structured error first, then the raw body
            let detail = match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(error_response) => error_response.describe(),
                Err(_) => text,
            };
            return Err(ApiError::Network(format!("HTTP {status}: {detail}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}
