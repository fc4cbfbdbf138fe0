//! Embedding Service - Main Entry Point
//!
//! Serves deterministic pseudo-embeddings over HTTP.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use biobert_embeddings::config::Config;
use biobert_embeddings::handlers::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    biobert_embeddings::init_tracing();
    let config = Config::from_env();

    info!("🚀 Starting Embedding Service v{}", env!("CARGO_PKG_VERSION"));
    info!("📦 Vector size: {}", config.vector_size);

    let state = match AppState::new(config.clone()) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("❌ Embedding service cannot start: {}", e);
            return Err(e.into());
        }
    };

    let app = handlers::router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("✅ Embedding Service listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(biobert_embeddings::shutdown_signal())
        .await?;

    Ok(())
}
