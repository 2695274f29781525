//! Multi-factor recall scorer.
//!
//! Factors: cosine similarity to the cue, importance, tier weight
//! (Archive > Timeline > Surface), and exponential recency falloff.

use chrono::{DateTime, Utc};

use mnemo_core::config::RecallConfig;
use mnemo_core::memory::MemoryRecord;

/// A record that cleared the similarity floor, with its composite score.
#[derive(Debug, Clone)]
pub struct ScoredRecord {
    pub record: MemoryRecord,
    /// Final composite score.
    pub score: f64,
    /// The raw similarity factor, kept for threshold decisions upstream.
    pub similarity: f64,
}

/// Exponential recency factor in (0, 1]: `e^(-hoursSinceAccess / halfLife)`.
pub fn recency_factor(
    last_accessed: DateTime<Utc>,
    now: DateTime<Utc>,
    half_life_hours: f64,
) -> f64 {
    if half_life_hours <= 0.0 {
        return 1.0;
    }
    let hours = (now - last_accessed).num_seconds().max(0) as f64 / 3600.0;
    (-hours / half_life_hours).exp()
}

/// Composite score for one record against an already-computed similarity.
pub fn score(
    record: &MemoryRecord,
    similarity: f64,
    now: DateTime<Utc>,
    cfg: &RecallConfig,
) -> f64 {
    let recency = recency_factor(record.last_accessed_at, now, cfg.recency_half_life_hours);

    cfg.w_similarity * similarity
        + cfg.w_importance * record.importance.value()
        + cfg.w_tier * record.tier.recall_weight()
        + cfg.w_recency * recency
}

/// Sort hits best-first. Ties broken by higher strength, then lower id,
/// so an unchanged store always ranks identically.
pub fn sort_hits(hits: &mut [ScoredRecord]) {
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                b.record
                    .strength
                    .partial_cmp(&a.record.strength)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
}
