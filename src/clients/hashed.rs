//! Hash-seeded pseudo-embedding client.
//!
//! Maps text to a reproducible unit vector: the SHA-256 digest of the text
//! seeds a Gaussian sampler, and the sampled vector is L2-normalized. No
//! model is involved; equal inputs give equal vectors.

use async_trait::async_trait;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::ServiceError;
use crate::services::gaussian::{self, GaussianSampler};
use crate::services::VectorOps;
use crate::traits::EmbeddingClient;

/// Deterministic text embedder.
#[derive(Debug, Clone)]
pub struct HashEmbeddingClient {
    dimension: usize,
}

impl HashEmbeddingClient {
    /// Create an embedder producing vectors of `dimension` components.
    pub fn new(dimension: usize) -> Result<Self, ServiceError> {
        if dimension == 0 {
            return Err(ServiceError::InvalidConfig(
                "embedding dimension must be positive".to_string(),
            ));
        }
        Ok(Self { dimension })
    }

    /// Seed derived from the text.
    ///
    /// The first 16 hex digits of the SHA-256 digest are the first eight
    /// digest bytes; read big-endian and reduced modulo 2^32.
    pub fn seed_for(text: &str) -> u32 {
        let digest = Sha256::digest(text.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(prefix) % (1u64 << 32)) as u32
    }

    /// Embed one text synchronously.
    pub fn vector_for(&self, text: &str) -> Vec<f64> {
        let mut vector = GaussianSampler::seeded(Self::seed_for(text)).sample(self.dimension);
        VectorOps::normalize_inplace(&mut vector);
        vector
    }

    /// Embed many texts; output order follows input order.
    pub fn vectors_for(&self, texts: &[String]) -> Vec<Vec<f64>> {
        texts.par_iter().map(|text| self.vector_for(text)).collect()
    }
}

#[async_trait]
impl EmbeddingClient for HashEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f64>, ServiceError> {
        Ok(self.vector_for(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>, ServiceError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }
        debug!("Embedding batch of {} texts", texts.len());
        Ok(self.vectors_for(texts))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn provider_name(&self) -> &str {
        "hash-mt19937"
    }

    fn check_available(&self) -> Result<(), ServiceError> {
        gaussian::self_check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want.iter()) {
            assert!((g - w).abs() < 1e-12, "got {:?}, want {:?}", got, want);
        }
    }

    #[test]
    fn test_seed_derivation() {
        assert_eq!(HashEmbeddingClient::seed_for("hello"), 1_605_411_598);
        assert_eq!(HashEmbeddingClient::seed_for(""), 2_566_659_092);
    }

    #[test]
    fn test_known_vectors() {
        let client = HashEmbeddingClient::new(4).unwrap();
        assert_close(
            &client.vector_for("hello"),
            &[
                0.0780019782624786,
                0.9746892572321352,
                0.1980167545078032,
                0.06845369352785115,
            ],
        );

        let client = HashEmbeddingClient::new(3).unwrap();
        assert_close(
            &client.vector_for(""),
            &[0.02146922684954849, 0.005626113337188614, -0.9997536792366407],
        );
    }

    #[test]
    fn test_unit_norm_and_length() {
        let long = "long ".repeat(500);
        for dim in [1, 2, 7, 768, 1024] {
            let client = HashEmbeddingClient::new(dim).unwrap();
            for text in ["", "a", "hello world", "ünïcødé ✓", long.as_str()] {
                let v = client.vector_for(text);
                assert_eq!(v.len(), dim);
                assert!((VectorOps::l2_norm(&v) - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_deterministic_and_distinct() {
        let client = HashEmbeddingClient::new(768).unwrap();
        assert_eq!(client.vector_for("protein"), client.vector_for("protein"));

        let corpus: Vec<String> = (0..200).map(|i| format!("text-{}", i)).collect();
        let vectors = client.vectors_for(&corpus);
        for i in 0..vectors.len() {
            for j in (i + 1)..vectors.len() {
                assert_ne!(vectors[i], vectors[j], "{} vs {}", corpus[i], corpus[j]);
            }
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let client = HashEmbeddingClient::new(16).unwrap();
        let texts = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let vectors = client.vectors_for(&texts);
        assert_eq!(vectors[0], client.vector_for("b"));
        assert_eq!(vectors[1], client.vector_for("a"));
        assert_eq!(vectors[0], vectors[2]);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            HashEmbeddingClient::new(0),
            Err(ServiceError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_trait_calls() {
        let client = HashEmbeddingClient::new(8).unwrap();
        assert!(client.check_available().is_ok());
        assert_eq!(client.dimension(), 8);

        let single = client.embed("x").await.unwrap();
        let batch = client.embed_batch(&["x".to_string()]).await.unwrap();
        assert_eq!(batch, vec![single]);
        assert!(client.embed_batch(&[]).await.unwrap().is_empty());
    }
}
