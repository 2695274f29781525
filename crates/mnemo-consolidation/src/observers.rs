//! Built-in consolidation observers.

use tracing::info;

use mnemo_core::models::ConsolidationSession;
use mnemo_core::traits::IConsolidationObserver;

/// Logs a one-line summary of each completed sleep session.
pub struct TracingObserver;

impl IConsolidationObserver for TracingObserver {
    fn on_sleep_complete(&self, session: &ConsolidationSession) {
        info!(
            started_at = %session.started_at,
            cycles = session.stats.cycles_run,
            replayed = session.stats.replayed,
            promoted = session.stats.promoted,
            dropped = session.stats.dropped,
            "consolidation observer: sleep complete"
        );
    }
}
