//! Configuration module for the embedding service and the gateway.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::error::ServiceError;

pub const DEFAULT_VECTOR_SIZE: usize = 768;
pub const DEFAULT_SERVICE_PORT: u16 = 5000;
pub const DEFAULT_GATEWAY_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:5000";

/// Embedding service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Dimension of every produced vector.
    pub vector_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_SERVICE_PORT,
            vector_size: DEFAULT_VECTOR_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_SERVICE_PORT),
            vector_size: parse_or(&lookup, "VECTOR_SIZE", DEFAULT_VECTOR_SIZE),
        }
    }

    /// Reject values the embedder cannot work with.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.vector_size == 0 {
            return Err(ServiceError::InvalidConfig(
                "VECTOR_SIZE must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Gateway configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the embedding service, without trailing slash.
    pub upstream_url: String,
    pub health_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_GATEWAY_PORT,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            health_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let upstream_url = lookup("BIOBERT_INFERENCE_URL")
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_GATEWAY_PORT),
            upstream_url: upstream_url.trim_end_matches('/').to_string(),
            health_timeout: Duration::from_secs(parse_or(&lookup, "HEALTH_TIMEOUT_SECONDS", 5)),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                30,
            )),
        }
    }

    /// `host:port` to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
