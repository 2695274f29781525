//! ConsolidationEngine: seeded noisy replay with an AtomicBool single-run
//! guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use mnemo_core::config::ConsolidationConfig;
use mnemo_core::errors::{ConsolidationError, MnemoResult};
use mnemo_core::memory::Tier;
use mnemo_core::models::{ConsolidationSession, SleepStage};
use mnemo_core::traits::IConsolidationObserver;
use mnemo_embeddings::cosine_similarity;
use mnemo_store::MemoryStore;

/// Offline consolidation over a [`MemoryStore`].
///
/// The engine holds no record state of its own; every sleep session takes
/// exclusive access to the store it consolidates. The `is_running` guard
/// rejects a second session while one is in flight.
pub struct ConsolidationEngine {
    config: ConsolidationConfig,
    /// Guard: only one sleep session can run at a time.
    is_running: Arc<AtomicBool>,
    observers: Vec<Box<dyn IConsolidationObserver>>,
}

impl ConsolidationEngine {
    pub fn new(config: ConsolidationConfig) -> Self {
        Self {
            config,
            is_running: Arc::new(AtomicBool::new(false)),
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Attach a hook invoked after each completed sleep session.
    pub fn add_observer(&mut self, observer: Box<dyn IConsolidationObserver>) {
        self.observers.push(observer);
    }

    /// Run a sleep session of `cycles` consolidation cycles.
    ///
    /// Stages rotate Light → Deep → REM. Each cycle that overruns the
    /// configured time budget truncates the session; the returned session
    /// then carries partial statistics with `truncated` set.
    pub fn run_sleep(
        &self,
        store: &mut MemoryStore,
        cycles: u32,
    ) -> MnemoResult<ConsolidationSession> {
        // Acquire the single-execution guard.
        if self
            .is_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ConsolidationError::AlreadyRunning.into());
        }

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = ConsolidationSession::new();
        let budget = Duration::from_millis(self.config.cycle_time_budget_ms);

        for cycle in 0..cycles {
            let cycle_started = Instant::now();
            self.run_cycle(store, cycle, &mut rng, &mut session);
            if cycle_started.elapsed() > budget {
                warn!(
                    cycle,
                    budget_ms = self.config.cycle_time_budget_ms,
                    "cycle overran its time budget, truncating session"
                );
                session.stats.truncated = true;
                break;
            }
        }

        // Release the guard.
        self.is_running.store(false, Ordering::SeqCst);

        info!(
            cycles = session.stats.cycles_run,
            replayed = session.stats.replayed,
            reinforced = session.stats.reinforced,
            promoted = session.stats.promoted,
            dropped = session.stats.dropped,
            enhanced = session.stats.enhanced,
            truncated = session.stats.truncated,
            "sleep session complete"
        );

        for observer in &self.observers {
            observer.on_sleep_complete(&session);
        }

        Ok(session)
    }

    fn run_cycle(
        &self,
        store: &mut MemoryStore,
        cycle: u32,
        rng: &mut StdRng,
        session: &mut ConsolidationSession,
    ) {
        let stage = SleepStage::for_cycle(cycle);
        let noise = match stage {
            SleepStage::Light => self.config.noise_light,
            SleepStage::Deep => self.config.noise_deep,
            SleepStage::Rem => self.config.noise_rem,
        };

        self.replay(store, noise, rng, session);
        self.enhance_salient(store, session);
        self.decay(store);
        self.migrate(store, session);
        self.drop_depleted(store, session);

        session.stage_noise.push((stage, noise));
        session.stats.cycles_run += 1;
        debug!(cycle, stage = stage.label(), noise, "cycle complete");
    }

    /// Replay a sample of non-Archive records with perturbed embeddings and
    /// reinforce each pair whose noisy similarity clears the co-activation
    /// threshold.
    fn replay(
        &self,
        store: &mut MemoryStore,
        noise: f64,
        rng: &mut StdRng,
        session: &mut ConsolidationSession,
    ) {
        // Candidate ids come out of the BTreeMap already sorted; the sample
        // is re-sorted so processing order stays deterministic.
        let candidates: Vec<String> = store
            .records()
            .filter(|r| r.tier != Tier::Archive)
            .map(|r| r.id.clone())
            .collect();
        let mut sampled: Vec<String> = candidates
            .choose_multiple(rng, self.config.replay_sample_size)
            .cloned()
            .collect();
        sampled.sort();

        let noisy: Vec<(String, Vec<f32>)> = sampled
            .iter()
            .filter_map(|id| store.get(id).map(|r| (id.clone(), r.embedding.clone())))
            .map(|(id, mut embedding)| {
                for component in &mut embedding {
                    *component += (rng.gen_range(-1.0..=1.0) * noise) as f32;
                }
                (id, embedding)
            })
            .collect();

        let mut coactivations = vec![0usize; noisy.len()];
        for i in 0..noisy.len() {
            for j in (i + 1)..noisy.len() {
                let similarity = cosine_similarity(&noisy[i].1, &noisy[j].1);
                if similarity >= self.config.coactivation_threshold {
                    coactivations[i] += 1;
                    coactivations[j] += 1;
                }
            }
        }

        for ((id, _), count) in noisy.iter().zip(&coactivations) {
            if *count == 0 {
                continue;
            }
            if let Some(record) = store.get_mut(id) {
                record.strength = record
                    .strength
                    .apply(self.config.alpha_reinforce * *count as f64);
                session.stats.reinforced += 1;
            }
        }

        session.stats.replayed += sampled.len();
        session.replayed_ids.extend(sampled);
    }

    /// Boost the importance of records tagged with an emotionally salient
    /// context: `importance' = importance · (1 + α·(1 − e^(−β·strength)))`,
    /// clamped to [0, 1].
    fn enhance_salient(&self, store: &mut MemoryStore, session: &mut ConsolidationSession) {
        let alpha = self.config.salience_alpha;
        let beta = self.config.salience_beta;
        let tags = &self.config.salience_tags;

        for record in store.records_mut() {
            let tagged = record
                .context
                .as_deref()
                .map(|ctx| tags.iter().any(|tag| ctx.contains(tag.as_str())))
                .unwrap_or(false);
            if !tagged {
                continue;
            }
            let multiplier = 1.0 + alpha * (1.0 - (-beta * record.strength.value()).exp());
            let boosted = record.importance * multiplier;
            if boosted > record.importance {
                session.stats.enhanced += 1;
            }
            record.importance = boosted;
        }
    }

    /// Passive per-cycle decay. The loss rate is scaled by the tier's decay
    /// multiplier and damped by [`decay_resistance`]: important, frequently
    /// recalled records fade slower than throwaway ones. Every record
    /// accrues one survived cycle.
    fn decay(&self, store: &mut MemoryStore) {
        let beta = self.config.beta_decay;
        for record in store.records_mut() {
            let damping = 1.0 - decay_resistance(record.importance.value(), record.access_count);
            record.strength = record
                .strength
                .apply(-beta * record.tier.decay_multiplier() * damping);
            record.cycles_survived += 1;
        }
    }

    /// Tier migration: Surface records recalled often enough inside the
    /// rolling window climb to Timeline; Timeline records that survived
    /// enough cycles climb to Archive.
    fn migrate(&self, store: &mut MemoryStore, session: &mut ConsolidationSession) {
        let now = Utc::now();
        let window = chrono::Duration::hours(self.config.promote_window_hours as i64);

        let promotable: Vec<String> = store
            .records()
            .filter(|r| match r.tier {
                Tier::Surface => {
                    r.access_count >= self.config.promote_access_threshold
                        && now - r.last_accessed_at <= window
                }
                Tier::Timeline => r.cycles_survived >= self.config.archive_cycle_threshold,
                Tier::Archive => false,
            })
            .map(|r| r.id.clone())
            .collect();

        for id in promotable {
            if let Some(record) = store.get_mut(&id) {
                if record.promote() {
                    debug!(id = %id, tier = %record.tier, "tier promotion");
                    session.stats.promoted += 1;
                }
            }
        }
    }

    fn drop_depleted(&self, store: &mut MemoryStore, session: &mut ConsolidationSession) {
        let depleted: Vec<String> = store
            .records()
            .filter(|r| r.strength.is_depleted())
            .map(|r| r.id.clone())
            .collect();
        for id in depleted {
            if store.drop_record(&id) {
                debug!(id = %id, "record depleted, dropped");
                session.stats.dropped += 1;
            }
        }
    }
}

/// How strongly a record resists passive decay, in [0, 0.9]. Importance
/// contributes up to 0.5, recall frequency up to 0.4; the cap keeps every
/// record mortal.
fn decay_resistance(importance: f64, access_count: u64) -> f64 {
    let frequency = (access_count as f64 * 0.01).min(0.4);
    (importance * 0.5 + frequency).min(0.9)
}
