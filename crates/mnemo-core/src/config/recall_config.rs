use serde::{Deserialize, Serialize};

use super::defaults;

/// Recall ranker configuration: factor weights and gates.
///
/// Score = `w_similarity * cosine + w_importance * importance
/// + w_tier * tier_weight + w_recency * recency_decay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    pub w_similarity: f64,
    pub w_importance: f64,
    pub w_tier: f64,
    pub w_recency: f64,
    /// Records below this cosine similarity never appear in results.
    pub similarity_floor: f64,
    /// Half-life of the exponential recency falloff.
    pub recency_half_life_hours: f64,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            w_similarity: defaults::DEFAULT_W_SIMILARITY,
            w_importance: defaults::DEFAULT_W_IMPORTANCE,
            w_tier: defaults::DEFAULT_W_TIER,
            w_recency: defaults::DEFAULT_W_RECENCY,
            similarity_floor: defaults::DEFAULT_SIMILARITY_FLOOR,
            recency_half_life_hours: defaults::DEFAULT_RECENCY_HALF_LIFE_HOURS,
        }
    }
}
