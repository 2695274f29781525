use serde::{Deserialize, Serialize};

use super::defaults;

/// Dialogue orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Recall score a memory hit must clear to answer directly.
    pub acceptance_threshold: f64,
    /// Scores in [low_confidence_threshold, acceptance_threshold) are
    /// remembered as partial matches and returned with hedged phrasing
    /// when every other source fails.
    pub low_confidence_threshold: f64,
    /// Whether the local generative fallback participates in escalation.
    pub generative_enabled: bool,
    /// Importance given to answers written back from the external
    /// knowledge service.
    pub external_writeback_importance: f64,
    /// Conversation turns kept for anaphora resolution.
    pub history_limit: usize,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: defaults::DEFAULT_ACCEPTANCE_THRESHOLD,
            low_confidence_threshold: defaults::DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            generative_enabled: defaults::DEFAULT_GENERATIVE_ENABLED,
            external_writeback_importance: defaults::DEFAULT_EXTERNAL_WRITEBACK_IMPORTANCE,
            history_limit: defaults::DEFAULT_HISTORY_LIMIT,
        }
    }
}
