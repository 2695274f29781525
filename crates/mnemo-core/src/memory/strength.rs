use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::STRENGTH_CEILING;

/// Reinforcement weight analogous to synaptic efficacy, clamped to
/// [0.0, `STRENGTH_CEILING`]. A record whose strength reaches zero is
/// dropped during consolidation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Strength(f64);

impl Strength {
    /// Create a new Strength, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, STRENGTH_CEILING))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Apply a signed delta, saturating at both bounds.
    pub fn apply(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Whether this record has decayed past the retention threshold.
    pub fn is_depleted(self) -> bool {
        self.0 <= f64::EPSILON
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self(crate::constants::INITIAL_STRENGTH)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Strength {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Strength> for f64 {
    fn from(s: Strength) -> Self {
        s.0
    }
}
