use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// Importance score clamped to [0.0, 1.0].
/// Governs retention priority and contributes to recall ranking.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Importance(f64);

impl Importance {
    /// Importance assigned to knowledge written back from an external
    /// collaborator.
    pub const ELEVATED: f64 = 0.8;

    /// Create a new Importance, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Blend with another importance: `self * (1 - weight) + other * weight`.
    /// Used when a near-duplicate write reinforces an existing record.
    pub fn blend(self, other: Importance, weight: f64) -> Self {
        let w = weight.clamp(0.0, 1.0);
        Self::new(self.0 * (1.0 - w) + other.0 * w)
    }
}

impl Default for Importance {
    fn default() -> Self {
        Self(0.5)
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Importance {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Importance> for f64 {
    fn from(i: Importance) -> Self {
        i.0
    }
}

impl Mul<f64> for Importance {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
