use chrono::{DateTime, Utc};

/// Sleep stage driving replay noise. The stages cycle Light → Deep → REM.
///
/// Deep replay privileges fidelity (lowest noise); associative/REM replay
/// privileges novel cross-record connections (highest noise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SleepStage {
    Light,
    Deep,
    Rem,
}

impl SleepStage {
    /// Stage for the given zero-based cycle index.
    pub fn for_cycle(cycle: u32) -> Self {
        match cycle % 3 {
            0 => SleepStage::Light,
            1 => SleepStage::Deep,
            _ => SleepStage::Rem,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SleepStage::Light => "light",
            SleepStage::Deep => "deep",
            SleepStage::Rem => "rem",
        }
    }
}

/// Aggregate statistics for one sleep invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Cycles actually completed (may be fewer than requested when the
    /// time budget truncates the session).
    pub cycles_run: u32,
    /// Total replay slots across all cycles.
    pub replayed: usize,
    /// Records whose strength increased through co-activation.
    pub reinforced: usize,
    /// Tier promotions applied.
    pub promoted: usize,
    /// Records dropped after decaying to zero strength.
    pub dropped: usize,
    /// Records whose importance was boosted by emotional salience.
    pub enhanced: usize,
    /// True when the per-cycle time budget cut the session short.
    pub truncated: bool,
}

/// Ephemeral record of one sleep invocation: what was replayed, at which
/// noise levels, and what changed. Handed to consolidation observers.
#[derive(Debug, Clone)]
pub struct ConsolidationSession {
    pub started_at: DateTime<Utc>,
    /// Ids replayed, in processing order, across all cycles.
    pub replayed_ids: Vec<String>,
    /// (stage, noise level) actually used, one entry per completed cycle.
    pub stage_noise: Vec<(SleepStage, f64)>,
    pub stats: SessionStats,
}

impl ConsolidationSession {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            replayed_ids: Vec::new(),
            stage_noise: Vec::new(),
            stats: SessionStats::default(),
        }
    }
}

impl Default for ConsolidationSession {
    fn default() -> Self {
        Self::new()
    }
}
