//! Gateway endpoints.
//!
//! Exposes the embedding API shape and delegates every call to the
//! upstream embedding service.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::clients::UpstreamClient;
use crate::config::GatewayConfig;
use crate::error::ServiceError;
use crate::models::{decode_payload, GatewayHealthResponse};

/// Gateway state shared across handlers.
pub struct GatewayState {
    pub upstream: UpstreamClient,
    pub config: GatewayConfig,
}

impl GatewayState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            upstream: UpstreamClient::new(&config),
            config,
        }
    }
}

/// Build the HTTP router of the gateway.
pub fn router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/embed", post(embed))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Health check; always 200, upstream status reported as a sub-field.
pub async fn health_check(State(state): State<Arc<GatewayState>>) -> Json<GatewayHealthResponse> {
    Json(GatewayHealthResponse {
        status: "ok".to_string(),
        biobert: state.upstream.health().await,
    })
}

/// Forward an embed request and relay the upstream status and body.
pub async fn embed(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    let payload = decode_payload(&body);

    let (status, body) = state
        .upstream
        .forward_embed(&payload)
        .await
        .map_err(|e| {
            error!("Forwarding to {} failed: {}", state.config.upstream_url, e);
            e
        })?;

    Ok((status, Json(body)))
}
