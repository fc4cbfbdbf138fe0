//! HTTP client for the upstream embedding service.
//!
//! Used by the gateway. Requests are forwarded as-is; there is no retry.

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::error::ServiceError;

/// Client for the embedding service behind the gateway.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    health_timeout: Duration,
    request_timeout: Duration,
}

impl UpstreamClient {
    /// Create a client from the gateway configuration.
    pub fn new(config: &GatewayConfig) -> Self {
        Self::with_base_url(
            config.upstream_url.clone(),
            config.health_timeout,
            config.request_timeout,
        )
    }

    /// Create a client for an explicit base URL.
    pub fn with_base_url(
        base_url: String,
        health_timeout: Duration,
        request_timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            health_timeout,
            request_timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upstream health body, or `{"status": "unreachable"}`.
    ///
    /// Never fails: a network error, an error status or a non-JSON body all
    /// degrade to the unreachable marker.
    pub async fn health(&self) -> Value {
        match self.fetch_health().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Upstream health check failed: {}", e);
                json!({ "status": "unreachable" })
            }
        }
    }

    async fn fetch_health(&self) -> anyhow::Result<Value> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(self.health_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "upstream health returned {}",
                response.status()
            ));
        }

        Ok(response.json::<Value>().await?)
    }

    /// Forward an embed payload and return the upstream status and body.
    pub async fn forward_embed(&self, payload: &Value) -> Result<(StatusCode, Value), ServiceError> {
        let response = self
            .client
            .post(format!("{}/embed", self.base_url))
            .timeout(self.request_timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| ServiceError::UpstreamUnreachable(e.to_string()))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| ServiceError::UpstreamUnreachable(e.to_string()))?;

        let body = response.json::<Value>().await.map_err(|e| {
            ServiceError::UpstreamUnreachable(format!("invalid upstream response: {}", e))
        })?;

        debug!("Upstream embed answered {}", status);
        Ok((status, body))
    }
}
