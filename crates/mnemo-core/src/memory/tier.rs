use std::fmt;

use serde::{Deserialize, Serialize};

/// Retention stage of a memory record.
///
/// Promotion is strictly monotonic: Surface → Timeline → Archive. There is
/// no demotion path; the only other transition is explicit removal.
/// The derived `Ord` follows promotion order, which the consolidation
/// tests rely on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Freshly written, easiest to decay.
    Surface,
    /// Replayed enough to enter the consolidated timeline.
    Timeline,
    /// Long-term schema knowledge, recalled preferentially.
    Archive,
}

impl Tier {
    /// Ranking weight: consolidated memories are privileged once promoted,
    /// so Archive > Timeline > Surface.
    pub fn recall_weight(self) -> f64 {
        match self {
            Tier::Surface => 0.3,
            Tier::Timeline => 0.6,
            Tier::Archive => 1.0,
        }
    }

    /// Passive decay multiplier per sleep cycle. Higher tiers decay more
    /// slowly.
    pub fn decay_multiplier(self) -> f64 {
        match self {
            Tier::Surface => 1.0,
            Tier::Timeline => 0.5,
            Tier::Archive => 0.2,
        }
    }

    /// The next tier up, if any.
    pub fn promoted(self) -> Option<Tier> {
        match self {
            Tier::Surface => Some(Tier::Timeline),
            Tier::Timeline => Some(Tier::Archive),
            Tier::Archive => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Surface => "surface",
            Tier::Timeline => "timeline",
            Tier::Archive => "archive",
        };
        f.write_str(s)
    }
}
