//! # mnemo-core
//!
//! Foundation crate for the Mnemo associative memory system.
//! Defines all types, traits, errors, config, constants, and the
//! anti-contamination classifier. Every other crate in the workspace
//! depends on this.

pub mod classify;
pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use classify::{classify, Utterance};
pub use config::MnemoConfig;
pub use errors::{MnemoError, MnemoResult};
pub use memory::{Importance, MemoryRecord, Strength, Tier};
pub use models::{AnswerSource, ConsolidationSession, ConversationTurn, SessionStats, SleepStage};
