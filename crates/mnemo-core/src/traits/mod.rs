//! Seams to the outside world: embedding generation, fallback answer
//! collaborators, and the post-consolidation observer hook.

mod collaborators;
mod embedding;
mod observer;

pub use collaborators::{IGenerativeFallback, IKnowledgeService};
pub use embedding::IEmbeddingProvider;
pub use observer::IConsolidationObserver;
