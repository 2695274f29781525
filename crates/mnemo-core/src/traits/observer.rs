use crate::models::ConsolidationSession;

/// Hook invoked after each completed sleep session.
///
/// Annotation layers (reputation scoring, achievements) attach here; the
/// core algorithms never depend on observers.
pub trait IConsolidationObserver: Send + Sync {
    fn on_sleep_complete(&self, session: &ConsolidationSession);
}
