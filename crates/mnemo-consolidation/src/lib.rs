//! # mnemo-consolidation
//!
//! The sleep-cycle consolidation engine. A sleep session runs a number of
//! cycles; each cycle replays a noisy sample of records, reinforces the
//! ones that co-activate, decays everything else, migrates records up the
//! tier ladder, and drops what has depleted.
//!
//! Sessions are reproducible: with a fixed seed and an identical store,
//! two runs replay the same records in the same order.

mod engine;
mod observers;

pub use engine::ConsolidationEngine;
pub use observers::TracingObserver;
