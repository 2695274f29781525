//! Configuration. Each subsystem has its own `#[serde(default)]` section so
//! a partial TOML file only overrides what it names.
//!
//! The numeric defaults below come from the narrative tuning of the source
//! system; treat them as starting points, not physical constants.

mod consolidation_config;
mod dialogue_config;
mod recall_config;
mod store_config;

pub use consolidation_config::ConsolidationConfig;
pub use dialogue_config::DialogueConfig;
pub use recall_config::RecallConfig;
pub use store_config::StoreConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{MnemoError, MnemoResult};

/// Default values shared by the config sections.
pub mod defaults {
    // Store
    pub const DEFAULT_MAX_RECORDS: usize = 10_000;
    pub const DEFAULT_DUPLICATE_SIMILARITY: f64 = 0.93;
    pub const DEFAULT_IMPORTANCE: f64 = 0.5;
    pub const DEFAULT_REINFORCE_STRENGTH_BOOST: f64 = 0.5;
    pub const DEFAULT_IMPORTANCE_BLEND_WEIGHT: f64 = 0.3;

    // Recall
    pub const DEFAULT_W_SIMILARITY: f64 = 0.5;
    pub const DEFAULT_W_IMPORTANCE: f64 = 0.2;
    pub const DEFAULT_W_TIER: f64 = 0.1;
    pub const DEFAULT_W_RECENCY: f64 = 0.2;
    pub const DEFAULT_SIMILARITY_FLOOR: f64 = 0.1;
    pub const DEFAULT_RECENCY_HALF_LIFE_HOURS: f64 = 72.0;

    // Consolidation
    pub const DEFAULT_NOISE_LIGHT: f64 = 0.1;
    pub const DEFAULT_NOISE_DEEP: f64 = 0.05;
    pub const DEFAULT_NOISE_REM: f64 = 0.3;
    pub const DEFAULT_ALPHA_REINFORCE: f64 = 0.2;
    pub const DEFAULT_BETA_DECAY: f64 = 0.1;
    pub const DEFAULT_COACTIVATION_THRESHOLD: f64 = 0.55;
    pub const DEFAULT_REPLAY_SAMPLE_SIZE: usize = 32;
    pub const DEFAULT_PROMOTE_ACCESS_THRESHOLD: u64 = 3;
    pub const DEFAULT_PROMOTE_WINDOW_HOURS: u64 = 24;
    pub const DEFAULT_ARCHIVE_CYCLE_THRESHOLD: u32 = 10;
    pub const DEFAULT_SALIENCE_ALPHA: f64 = 0.3;
    pub const DEFAULT_SALIENCE_BETA: f64 = 2.0;
    pub const DEFAULT_CYCLE_TIME_BUDGET_MS: u64 = 1_000;

    // Dialogue
    pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.35;
    pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 0.18;
    pub const DEFAULT_GENERATIVE_ENABLED: bool = false;
    pub const DEFAULT_EXTERNAL_WRITEBACK_IMPORTANCE: f64 = 0.8;
    pub const DEFAULT_HISTORY_LIMIT: usize = 10;
}

/// Top-level configuration for one conversational agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemoConfig {
    pub store: StoreConfig,
    pub recall: RecallConfig,
    pub consolidation: ConsolidationConfig,
    pub dialogue: DialogueConfig,
}

impl MnemoConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(text: &str) -> MnemoResult<Self> {
        toml::from_str(text).map_err(|e| MnemoError::Config {
            reason: e.to_string(),
        })
    }

    /// Load from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> MnemoResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MnemoError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&text)
    }
}
