use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Importance, Strength, Tier};

/// One atomic memory unit.
///
/// Records are created only through the store's learn path, after the
/// anti-contamination filter has passed the content as non-interrogative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// UUID v4 identifier, immutable, never reused.
    pub id: String,
    /// Normalized text payload.
    pub content: String,
    /// Optional free-text category/topic tag.
    pub context: Option<String>,
    /// Retention priority, mutable, clamped to [0, 1].
    pub importance: Importance,
    /// Fixed-length vector derived from `content`.
    pub embedding: Vec<f32>,
    /// Retention tier; transitions only Surface → Timeline → Archive.
    pub tier: Tier,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Last successful recall hit.
    pub last_accessed_at: DateTime<Utc>,
    /// Incremented on every successful recall hit.
    pub access_count: u64,
    /// Synaptic weight; reinforced on repeated learning, decayed by sleep.
    pub strength: Strength,
    /// Consolidation cycles survived at the current tier. Reset on
    /// promotion; drives the Timeline → Archive transfer.
    pub cycles_survived: u32,
    /// blake3 hash of the normalized content, for exact-duplicate detection.
    pub content_hash: String,
}

impl MemoryRecord {
    /// Create a record at tier Surface with default strength.
    pub fn new(
        content: String,
        context: Option<String>,
        importance: Importance,
        embedding: Vec<f32>,
    ) -> Self {
        let now = Utc::now();
        let content_hash = Self::compute_content_hash(&content);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            context,
            importance,
            embedding,
            tier: Tier::Surface,
            created_at: now,
            last_accessed_at: now,
            access_count: 0,
            strength: Strength::default(),
            cycles_survived: 0,
            content_hash,
        }
    }

    /// Collapse runs of whitespace and trim. Applied to all content before
    /// hashing, embedding, and storage.
    pub fn normalize_content(raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// blake3 hash of the normalized content.
    pub fn compute_content_hash(content: &str) -> String {
        blake3::hash(content.as_bytes()).to_hex().to_string()
    }

    /// Record a successful recall hit.
    pub fn mark_accessed(&mut self, now: DateTime<Utc>) {
        self.access_count += 1;
        self.last_accessed_at = now;
    }

    /// Promote to the next tier, resetting the survival counter.
    /// Returns false when already at Archive.
    pub fn promote(&mut self) -> bool {
        match self.tier.promoted() {
            Some(next) => {
                self.tier = next;
                self.cycles_survived = 0;
                true
            }
            None => false,
        }
    }
}

/// Identity equality: two records are equal if they have the same ID.
/// For content comparison use `content_hash`.
impl PartialEq for MemoryRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str) -> MemoryRecord {
        MemoryRecord::new(
            content.to_string(),
            None,
            Importance::default(),
            vec![0.0; 4],
        )
    }

    #[test]
    fn new_record_starts_at_surface() {
        let r = record("사과는 빨간색");
        assert_eq!(r.tier, Tier::Surface);
        assert_eq!(r.access_count, 0);
        assert!(!r.strength.is_depleted());
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(
            MemoryRecord::normalize_content("  a \t b\n c  "),
            "a b c"
        );
    }

    #[test]
    fn promotion_is_monotonic_and_resets_counter() {
        let mut r = record("x");
        r.cycles_survived = 7;
        assert!(r.promote());
        assert_eq!(r.tier, Tier::Timeline);
        assert_eq!(r.cycles_survived, 0);
        assert!(r.promote());
        assert_eq!(r.tier, Tier::Archive);
        assert!(!r.promote());
        assert_eq!(r.tier, Tier::Archive);
    }

    #[test]
    fn mark_accessed_bumps_count() {
        let mut r = record("x");
        let before = r.last_accessed_at;
        r.mark_accessed(Utc::now());
        assert_eq!(r.access_count, 1);
        assert!(r.last_accessed_at >= before);
    }

    #[test]
    fn identical_content_hashes_match() {
        assert_eq!(record("same").content_hash, record("same").content_hash);
        assert_ne!(record("a").content_hash, record("b").content_hash);
    }
}
