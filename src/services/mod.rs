//! Services module.

pub mod gaussian;
pub mod orchestrator;
pub mod vector_ops;

pub use gaussian::GaussianSampler;
pub use orchestrator::EmbeddingOrchestrator;
pub use vector_ops::VectorOps;
