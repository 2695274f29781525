//! Ephemeral models: consolidation sessions and conversation turns.
//! Neither is persisted; both are observable outputs of a run.

mod session;
mod turn;

pub use session::{ConsolidationSession, SessionStats, SleepStage};
pub use turn::{AnswerSource, ConversationTurn};
