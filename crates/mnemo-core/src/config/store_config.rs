use serde::{Deserialize, Serialize};

use super::defaults;

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum record capacity; exceeding it evicts the weakest Surface
    /// records, oldest first.
    pub max_records: usize,
    /// Cosine similarity at or above which a same-context write reinforces
    /// the existing record instead of creating a duplicate.
    pub duplicate_similarity: f64,
    /// Importance assigned when the caller does not supply one.
    pub default_importance: f64,
    /// Strength added to a record on reinforcement.
    pub reinforce_strength_boost: f64,
    /// Weight of the incoming importance when blending into an existing
    /// record on reinforcement.
    pub importance_blend_weight: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_records: defaults::DEFAULT_MAX_RECORDS,
            duplicate_similarity: defaults::DEFAULT_DUPLICATE_SIMILARITY,
            default_importance: defaults::DEFAULT_IMPORTANCE,
            reinforce_strength_boost: defaults::DEFAULT_REINFORCE_STRENGTH_BOOST,
            importance_blend_weight: defaults::DEFAULT_IMPORTANCE_BLEND_WEIGHT,
        }
    }
}
