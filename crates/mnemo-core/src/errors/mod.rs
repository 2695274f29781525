//! Error taxonomy. Sub-enums per subsystem, aggregated into [`MnemoError`].
//!
//! `RejectedInput` and collaborator unavailability are recoverable and never
//! surface to the end user; only store integrity violations are fatal.

mod consolidation_error;
mod store_error;

pub use consolidation_error::ConsolidationError;
pub use store_error::StoreError;

/// Top-level error type for the Mnemo system.
#[derive(Debug, thiserror::Error)]
pub enum MnemoError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Consolidation(#[from] ConsolidationError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("collaborator unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Convenience result alias used across the workspace.
pub type MnemoResult<T> = Result<T, MnemoError>;
