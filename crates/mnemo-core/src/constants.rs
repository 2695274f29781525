/// Mnemo system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dimensionality of record embeddings produced by the default provider.
pub const EMBEDDING_DIMENSIONS: usize = 128;

/// Ceiling applied when clamping record strength.
pub const STRENGTH_CEILING: f64 = 10.0;

/// Strength assigned to a freshly written record.
pub const INITIAL_STRENGTH: f64 = 1.0;

/// Conversion used by the demo surface: "sleep N hours" runs
/// `N * CYCLES_PER_SLEEP_HOUR` consolidation cycles.
pub const CYCLES_PER_SLEEP_HOUR: u32 = 2;

/// Snapshot format version, bumped on incompatible changes.
pub const SNAPSHOT_VERSION: u32 = 1;
