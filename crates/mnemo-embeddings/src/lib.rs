//! # mnemo-embeddings
//!
//! Deterministic embedding generation. A feature-hashing provider stands
//! in for neural embeddings: less semantically rich, but fast on low-power
//! hardware and fully reproducible, which the consolidation engine's
//! determinism guarantee relies on.

mod hashing;
pub mod similarity;

pub use hashing::HashingEmbedder;
pub use similarity::cosine_similarity;
