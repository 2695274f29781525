use serde::{Deserialize, Serialize};

use super::defaults;

/// Consolidation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Embedding noise during light sleep replay.
    pub noise_light: f64,
    /// Embedding noise during deep sleep replay (privileges fidelity).
    pub noise_deep: f64,
    /// Embedding noise during associative/REM replay (privileges novel
    /// cross-record connections).
    pub noise_rem: f64,
    /// Strength gained per co-activation during replay.
    pub alpha_reinforce: f64,
    /// Passive strength lost per cycle, scaled by the tier's decay
    /// multiplier.
    pub beta_decay: f64,
    /// Noisy cosine similarity at or above which two replayed records
    /// count as co-activated.
    pub coactivation_threshold: f64,
    /// Maximum records replayed per cycle.
    pub replay_sample_size: usize,
    /// Surface → Timeline: recall hits required inside the rolling window.
    pub promote_access_threshold: u64,
    /// Rolling window for the access-based promotion rule.
    pub promote_window_hours: u64,
    /// Timeline → Archive: cycles a record must survive without depleting.
    pub archive_cycle_threshold: u32,
    /// Context tags treated as emotionally salient.
    pub salience_tags: Vec<String>,
    /// α in the enhancement multiplier `1 + α·E·(1 − e^(−β·s))`.
    pub salience_alpha: f64,
    /// β in the enhancement multiplier.
    pub salience_beta: f64,
    /// Per-cycle wall-clock budget; exceeding it truncates the session and
    /// reports partial statistics instead of hanging.
    pub cycle_time_budget_ms: u64,
    /// Seed for noise sampling. `None` draws from entropy; tests inject a
    /// fixed seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            noise_light: defaults::DEFAULT_NOISE_LIGHT,
            noise_deep: defaults::DEFAULT_NOISE_DEEP,
            noise_rem: defaults::DEFAULT_NOISE_REM,
            alpha_reinforce: defaults::DEFAULT_ALPHA_REINFORCE,
            beta_decay: defaults::DEFAULT_BETA_DECAY,
            coactivation_threshold: defaults::DEFAULT_COACTIVATION_THRESHOLD,
            replay_sample_size: defaults::DEFAULT_REPLAY_SAMPLE_SIZE,
            promote_access_threshold: defaults::DEFAULT_PROMOTE_ACCESS_THRESHOLD,
            promote_window_hours: defaults::DEFAULT_PROMOTE_WINDOW_HOURS,
            archive_cycle_threshold: defaults::DEFAULT_ARCHIVE_CYCLE_THRESHOLD,
            salience_tags: vec![
                "emotion".to_string(),
                "danger".to_string(),
                "감정".to_string(),
                "위험".to_string(),
            ],
            salience_alpha: defaults::DEFAULT_SALIENCE_ALPHA,
            salience_beta: defaults::DEFAULT_SALIENCE_BETA,
            cycle_time_budget_ms: defaults::DEFAULT_CYCLE_TIME_BUDGET_MS,
            seed: None,
        }
    }
}
