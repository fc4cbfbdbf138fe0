//! HTTP handlers module.
//!
//! Provides the embedding service endpoints and its router.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ServiceError;
use crate::models::{decode_payload, EmbedInput, EmbedResponse, HealthResponse};
use crate::services::EmbeddingOrchestrator;

/// Application state shared across handlers.
pub struct AppState {
    pub orchestrator: Arc<EmbeddingOrchestrator>,
    pub config: Config,
}

impl AppState {
    /// Build the state, running the embedder's startup checks.
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        let orchestrator = Arc::new(EmbeddingOrchestrator::new(&config)?);
        Ok(Self {
            orchestrator,
            config,
        })
    }
}

/// Build the HTTP router of the embedding service.
pub fn router(state: Arc<AppState>) -> Router {
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

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        vector_size: state.config.vector_size,
    })
}

/// Embed one text (`text`) or a list of texts (`texts`).
pub async fn embed(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<EmbedResponse>, ServiceError> {
    let payload = decode_payload(&body);
    let input = EmbedInput::from_payload(&payload).map_err(|e| {
        info!("Rejected embed request: {}", e);
        e
    })?;

    debug!("Embedding {} text(s)", input.len());

    let response = state.orchestrator.embed(input).await?;
    Ok(Json(response))
}
