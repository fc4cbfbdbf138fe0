//! Embedding clients module.

pub mod hashed;
pub mod upstream;

pub use hashed::HashEmbeddingClient;
pub use upstream::UpstreamClient;
