use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an answer came from on the escalation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Canned greeting/acknowledgement table.
    Quick,
    /// Recall from the memory record store.
    Memory,
    /// Local generative fallback collaborator.
    Generative,
    /// External knowledge service collaborator.
    External,
    /// No source resolved (learn confirmations and "unknown" responses).
    None,
}

/// One completed dialogue turn. The orchestrator keeps a short history of
/// these to resolve anaphora ("that", "그거") in the next turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
    pub source: AnswerSource,
    pub at: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(question: String, answer: String, source: AnswerSource) -> Self {
        Self {
            question,
            answer,
            source,
            at: Utc::now(),
        }
    }
}
