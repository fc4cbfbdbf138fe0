//! Embedding orchestrator service.
//!
//! Owns the embedding client, runs its capability check once at startup and
//! shapes embed results according to the request form.

use std::sync::Arc;
use tracing::info;

use crate::clients::HashEmbeddingClient;
use crate::config::Config;
use crate::error::ServiceError;
use crate::models::{EmbedInput, EmbedResponse};
use crate::traits::EmbeddingClient;

/// The main orchestrator that manages the embedding client.
pub struct EmbeddingOrchestrator {
    client: Arc<dyn EmbeddingClient>,
}

impl EmbeddingOrchestrator {
    /// Create an orchestrator with the hash-seeded client.
    ///
    /// Fails fast if the configuration is invalid or the generator does not
    /// pass its self-check.
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        config.validate()?;
        let client = HashEmbeddingClient::new(config.vector_size)?;
        Self::with_client(Arc::new(client))
    }

    /// Create an orchestrator around an arbitrary client.
    pub fn with_client(client: Arc<dyn EmbeddingClient>) -> Result<Self, ServiceError> {
        client.check_available()?;
        info!(
            "✓ Embedding client ready: {} ({}D)",
            client.provider_name(),
            client.dimension()
        );
        Ok(Self { client })
    }

    /// Get the embedding dimension.
    pub fn dimension(&self) -> usize {
        self.client.dimension()
    }

    /// Embed validated input; the response shape follows the input form.
    pub async fn embed(&self, input: EmbedInput) -> Result<EmbedResponse, ServiceError> {
        match input {
            EmbedInput::Single(text) => {
                let embedding = self.client.embed(&text).await?;
                Ok(EmbedResponse::Single { embedding })
            }
            EmbedInput::Batch(texts) => {
                let embeddings = self.client.embed_batch(&texts).await?;
                Ok(EmbedResponse::Batch { embeddings })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct BrokenClient;

    #[async_trait]
    impl EmbeddingClient for BrokenClient {
        async fn embed(&self, _text: &str) -> Result<Vec<f64>, ServiceError> {
            unreachable!()
        }

        async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f64>>, ServiceError> {
            unreachable!()
        }

        fn dimension(&self) -> usize {
            4
        }

        fn provider_name(&self) -> &str {
            "broken"
        }

        fn check_available(&self) -> Result<(), ServiceError> {
            Err(ServiceError::EnvironmentPrecondition(
                "generator missing".to_string(),
            ))
        }
    }

    #[test]
    fn test_capability_check_fails_fast() {
        let result = EmbeddingOrchestrator::with_client(Arc::new(BrokenClient));
        assert!(matches!(
            result,
            Err(ServiceError::EnvironmentPrecondition(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            vector_size: 0,
            ..Config::default()
        };
        assert!(matches!(
            EmbeddingOrchestrator::new(&config),
            Err(ServiceError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_response_shape_follows_input() {
        let config = Config {
            vector_size: 8,
            ..Config::default()
        };
        let orchestrator = EmbeddingOrchestrator::new(&config).unwrap();
        assert_eq!(orchestrator.dimension(), 8);

        match orchestrator
            .embed(EmbedInput::Single("hello".into()))
            .await
            .unwrap()
        {
            EmbedResponse::Single { embedding } => assert_eq!(embedding.len(), 8),
            other => panic!("expected single, got {:?}", other),
        }

        match orchestrator
            .embed(EmbedInput::Batch(vec!["a".into(), "b".into()]))
            .await
            .unwrap()
        {
            EmbedResponse::Batch { embeddings } => {
                assert_eq!(embeddings.len(), 2);
                assert_ne!(embeddings[0], embeddings[1]);
            }
            other => panic!("expected batch, got {:?}", other),
        }
    }
}
