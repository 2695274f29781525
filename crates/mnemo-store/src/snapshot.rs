//! Snapshot persistence boundary.
//!
//! The wire format is JSON, but callers only see opaque bytes. A snapshot
//! round-trips every record field exactly; integrity violations (duplicate
//! ids, out-of-range scores, unknown tiers) abort deserialization instead
//! of silently corrupting the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use mnemo_core::config::{RecallConfig, StoreConfig};
use mnemo_core::constants::SNAPSHOT_VERSION;
use mnemo_core::errors::{MnemoResult, StoreError};
use mnemo_core::memory::MemoryRecord;
use mnemo_core::traits::IEmbeddingProvider;

use crate::store::MemoryStore;

/// Serialized form of a store.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub version: u32,
    pub records: Vec<MemoryRecord>,
}

impl MemoryStore {
    /// Serialize the full record set into an opaque blob.
    pub fn serialize(&self) -> MnemoResult<Vec<u8>> {
        let snapshot = StoreSnapshot {
            version: SNAPSHOT_VERSION,
            records: self.records_map().values().cloned().collect(),
        };
        Ok(serde_json::to_vec(&snapshot)?)
    }

    /// Rebuild a store from a blob produced by [`MemoryStore::serialize`].
    pub fn deserialize(
        blob: &[u8],
        embedder: Box<dyn IEmbeddingProvider>,
        store_config: StoreConfig,
        recall_config: RecallConfig,
    ) -> MnemoResult<MemoryStore> {
        let snapshot: StoreSnapshot =
            serde_json::from_slice(blob).map_err(|e| StoreError::CorruptSnapshot {
                details: e.to_string(),
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::CorruptSnapshot {
                details: format!("unsupported snapshot version {}", snapshot.version),
            }
            .into());
        }

        let mut records = BTreeMap::new();
        for record in snapshot.records {
            if record.embedding.len() != embedder.dimensions() {
                return Err(StoreError::DimensionMismatch {
                    expected: embedder.dimensions(),
                    actual: record.embedding.len(),
                }
                .into());
            }
            validate_record(&record)?;
            if records.contains_key(&record.id) {
                return Err(StoreError::DuplicateId { id: record.id }.into());
            }
            records.insert(record.id.clone(), record);
        }

        let mut store = MemoryStore::new(embedder, store_config, recall_config);
        store.replace_records(records);
        Ok(store)
    }
}

fn validate_record(record: &MemoryRecord) -> MnemoResult<()> {
    let importance = record.importance.value();
    if !importance.is_finite() || !(0.0..=1.0).contains(&importance) {
        return Err(StoreError::CorruptSnapshot {
            details: format!("record {} importance out of range: {importance}", record.id),
        }
        .into());
    }
    let strength = record.strength.value();
    if !strength.is_finite() || strength < 0.0 {
        return Err(StoreError::CorruptSnapshot {
            details: format!("record {} strength out of range: {strength}", record.id),
        }
        .into());
    }
    if record.embedding.iter().any(|v| !v.is_finite()) {
        return Err(StoreError::CorruptSnapshot {
            details: format!("record {} embedding contains non-finite values", record.id),
        }
        .into());
    }
    Ok(())
}
