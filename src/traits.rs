//! Core traits for embedding clients.

use async_trait::async_trait;

use crate::error::ServiceError;

/// Trait for embedding clients that can generate embeddings.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f64>, ServiceError>;

    /// Generate embeddings for multiple texts, aligned with the input.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>, ServiceError>;

    /// Dimension of every produced vector.
    fn dimension(&self) -> usize;

    /// Get the provider name.
    fn provider_name(&self) -> &str;

    /// Verify the client can serve requests in this environment.
    fn check_available(&self) -> Result<(), ServiceError>;
}
