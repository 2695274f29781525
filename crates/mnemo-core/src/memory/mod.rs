//! Memory record types: the record itself plus the clamped score newtypes
//! and the retention tier.

mod importance;
mod record;
mod strength;
mod tier;

pub use importance::Importance;
pub use record::MemoryRecord;
pub use strength::Strength;
pub use tier::Tier;
