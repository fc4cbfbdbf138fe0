//! Gateway Service - Main Entry Point
//!
//! Forwards embedding requests to the upstream embedding service.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use biobert_embeddings::config::GatewayConfig;
use biobert_embeddings::gateway::{self, GatewayState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    biobert_embeddings::init_tracing();
    let config = GatewayConfig::from_env();

    info!("🚀 Starting Gateway Service v{}", env!("CARGO_PKG_VERSION"));
    info!("🔗 Upstream: {}", config.upstream_url);
    info!(
        "⏱  Timeouts: health {:?}, embed {:?}",
        config.health_timeout, config.request_timeout
    );

    let addr = config.bind_address();
    let app = gateway::router(Arc::new(GatewayState::new(config)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("✅ Gateway listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(biobert_embeddings::shutdown_signal())
        .await?;

    Ok(())
}
