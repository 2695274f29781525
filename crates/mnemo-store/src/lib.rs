//! # mnemo-store
//!
//! The memory record store and recall ranker. One conversational agent
//! owns exactly one [`MemoryStore`]; all mutation goes through `&mut self`,
//! which gives the exclusive critical section the design assumes without
//! any locking.

pub mod ranking;
mod snapshot;
mod store;

pub use ranking::ScoredRecord;
pub use snapshot::StoreSnapshot;
pub use store::MemoryStore;
