//! The memory record store: write-with-dedup, forget, get, ranked query,
//! and capacity eviction.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info};

use mnemo_core::classify::{classify, Utterance};
use mnemo_core::config::{RecallConfig, StoreConfig};
use mnemo_core::errors::{MnemoResult, StoreError};
use mnemo_core::memory::{Importance, MemoryRecord, Tier};
use mnemo_core::traits::IEmbeddingProvider;
use mnemo_embeddings::{cosine_similarity, HashingEmbedder};

use crate::ranking::{self, ScoredRecord};

/// Associative memory store for one conversational agent.
///
/// Records live in a `BTreeMap` keyed by id so that every iteration order
/// is deterministic; consolidation reproducibility depends on it.
pub struct MemoryStore {
    records: BTreeMap<String, MemoryRecord>,
    embedder: Box<dyn IEmbeddingProvider>,
    store_config: StoreConfig,
    recall_config: RecallConfig,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("records", &self.records)
            .field("embedder", &self.embedder.name())
            .field("store_config", &self.store_config)
            .field("recall_config", &self.recall_config)
            .finish()
    }
}

impl MemoryStore {
    pub fn new(
        embedder: Box<dyn IEmbeddingProvider>,
        store_config: StoreConfig,
        recall_config: RecallConfig,
    ) -> Self {
        Self {
            records: BTreeMap::new(),
            embedder,
            store_config,
            recall_config,
        }
    }

    /// Store with the default feature-hashing embedder and default config.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(HashingEmbedder::default()),
            StoreConfig::default(),
            RecallConfig::default(),
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MemoryRecord> {
        self.records.get(id)
    }

    /// Mutable access by id, used by the consolidation engine.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut MemoryRecord> {
        self.records.get_mut(id)
    }

    /// Iterate records in id order.
    pub fn records(&self) -> impl Iterator<Item = &MemoryRecord> {
        self.records.values()
    }

    /// Mutable iteration, used by the consolidation engine.
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut MemoryRecord> {
        self.records.values_mut()
    }

    pub fn embedder(&self) -> &dyn IEmbeddingProvider {
        self.embedder.as_ref()
    }

    pub fn store_config(&self) -> &StoreConfig {
        &self.store_config
    }

    pub fn recall_config(&self) -> &RecallConfig {
        &self.recall_config
    }

    /// Write new content into the store.
    ///
    /// Interrogative content fails with [`StoreError::RejectedInput`], the
    /// anti-contamination guard. A near-duplicate of an existing record
    /// with the same context reinforces that record instead of creating a
    /// new one.
    pub fn write(
        &mut self,
        content: &str,
        context: Option<&str>,
        importance: Option<f64>,
    ) -> MnemoResult<String> {
        if classify(content) == Utterance::Question {
            debug!(content, "rejected interrogative content");
            return Err(StoreError::RejectedInput {
                content: content.to_string(),
            }
            .into());
        }

        let normalized = MemoryRecord::normalize_content(content);
        let importance =
            Importance::new(importance.unwrap_or(self.store_config.default_importance));
        let embedding = self.embedder.embed(&normalized)?;

        // Exact duplicate: same content hash and context.
        let content_hash = MemoryRecord::compute_content_hash(&normalized);
        let exact = self
            .records
            .values()
            .find(|r| r.content_hash == content_hash && r.context.as_deref() == context)
            .map(|r| r.id.clone());
        if let Some(id) = exact {
            self.reinforce(&id, importance);
            return Ok(id);
        }

        // Near duplicate: same context, similarity above the threshold.
        let near = self
            .records
            .values()
            .filter(|r| r.context.as_deref() == context)
            .map(|r| (r.id.clone(), cosine_similarity(&embedding, &r.embedding)))
            .filter(|(_, sim)| *sim >= self.store_config.duplicate_similarity)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        if let Some((id, sim)) = near {
            debug!(id = %id, similarity = sim, "reinforcing near-duplicate");
            self.reinforce(&id, importance);
            return Ok(id);
        }

        let record = MemoryRecord::new(
            normalized,
            context.map(str::to_string),
            importance,
            embedding,
        );
        let id = record.id.clone();
        if self.records.contains_key(&id) {
            // Id collision would corrupt identity invariants; abort.
            return Err(StoreError::DuplicateId { id }.into());
        }
        self.records.insert(id.clone(), record);
        debug!(id = %id, total = self.records.len(), "record created");

        self.enforce_capacity();
        Ok(id)
    }

    fn reinforce(&mut self, id: &str, incoming: Importance) {
        let boost = self.store_config.reinforce_strength_boost;
        let blend_weight = self.store_config.importance_blend_weight;
        if let Some(record) = self.records.get_mut(id) {
            record.strength = record.strength.apply(boost);
            record.importance = record.importance.blend(incoming, blend_weight);
            record.mark_accessed(Utc::now());
        }
    }

    /// Remove a record outright. Returns false if absent.
    pub fn forget(&mut self, id: &str) -> bool {
        let removed = self.records.remove(id).is_some();
        if removed {
            debug!(id = %id, "record forgotten");
        }
        removed
    }

    /// Remove a record as part of consolidation decay.
    pub fn drop_record(&mut self, id: &str) -> bool {
        self.records.remove(id).is_some()
    }

    /// Ranked recall against a cue.
    ///
    /// Every returned record has its `access_count` bumped and
    /// `last_accessed_at` refreshed. An empty result is not an error: it
    /// means nothing cleared the similarity floor.
    pub fn query(&mut self, cue: &str, top_k: usize) -> MnemoResult<Vec<ScoredRecord>> {
        if top_k == 0 || self.records.is_empty() {
            return Ok(Vec::new());
        }

        let cue_embedding = self.embedder.embed(&MemoryRecord::normalize_content(cue))?;
        let now = Utc::now();
        let floor = self.recall_config.similarity_floor;

        let mut hits: Vec<ScoredRecord> = self
            .records
            .values()
            .filter_map(|record| {
                let similarity = cosine_similarity(&cue_embedding, &record.embedding);
                if similarity < floor {
                    return None;
                }
                Some(ScoredRecord {
                    score: ranking::score(record, similarity, now, &self.recall_config),
                    similarity,
                    record: record.clone(),
                })
            })
            .collect();

        ranking::sort_hits(&mut hits);
        hits.truncate(top_k);

        // Observable side effect of a successful recall hit.
        for hit in &mut hits {
            if let Some(stored) = self.records.get_mut(&hit.record.id) {
                stored.mark_accessed(now);
                hit.record.mark_accessed(now);
            }
        }

        Ok(hits)
    }

    /// Evict the weakest Surface records, oldest first, until within
    /// capacity. Falls back to the weakest record overall when no Surface
    /// records remain.
    fn enforce_capacity(&mut self) {
        while self.records.len() > self.store_config.max_records {
            let victim = self
                .records
                .values()
                .filter(|r| r.tier == Tier::Surface)
                .min_by(|a, b| {
                    a.strength
                        .partial_cmp(&b.strength)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then_with(|| a.created_at.cmp(&b.created_at))
                })
                .or_else(|| {
                    self.records.values().min_by(|a, b| {
                        a.strength
                            .partial_cmp(&b.strength)
                            .unwrap_or(std::cmp::Ordering::Equal)
                            .then_with(|| a.created_at.cmp(&b.created_at))
                    })
                })
                .map(|r| r.id.clone());

            match victim {
                Some(id) => {
                    info!(id = %id, "capacity eviction");
                    self.records.remove(&id);
                }
                None => break,
            }
        }
    }

    pub(crate) fn records_map(&self) -> &BTreeMap<String, MemoryRecord> {
        &self.records
    }

    pub(crate) fn replace_records(&mut self, records: BTreeMap<String, MemoryRecord>) {
        self.records = records;
    }
}
