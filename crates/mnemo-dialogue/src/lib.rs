//! # mnemo-dialogue
//!
//! The dialogue orchestrator on top of the store and the consolidation
//! engine. Every turn is either a learn (statement) or an answer
//! (question); answers escalate quick table → memory recall → generative
//! fallback → external knowledge, ending at a hedged partial match or a
//! fixed "don't know" response.

pub mod anaphora;
pub mod phrasing;
pub mod quick;
pub mod sources;

mod orchestrator;

pub use orchestrator::Orchestrator;
pub use sources::{
    Answer, ExternalSource, GenerativeSource, IAnswerSource, MemorySource, TurnContext,
};
