//! The dialogue orchestrator: owns the store, the consolidation engine,
//! and the answer escalation pipeline.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use mnemo_core::classify::{classify, Utterance};
use mnemo_core::config::DialogueConfig;
use mnemo_core::constants::CYCLES_PER_SLEEP_HOUR;
use mnemo_core::errors::{MnemoError, MnemoResult, StoreError};
use mnemo_core::models::{AnswerSource, ConsolidationSession, ConversationTurn};
use mnemo_core::traits::{IGenerativeFallback, IKnowledgeService};
use mnemo_consolidation::ConsolidationEngine;
use mnemo_store::MemoryStore;

use crate::sources::{
    ExternalSource, GenerativeSource, IAnswerSource, MemorySource, TurnContext,
};
use crate::{anaphora, quick};

const UNKNOWN_ANSWER: &str = "잘 모르겠어요.";

/// Conversational front-end over one memory store.
///
/// A turn is handled in a fixed order: quick table, anaphora resolution,
/// classification, then either the learn path (statements become records)
/// or the answer escalation path (questions never do).
pub struct Orchestrator {
    store: MemoryStore,
    engine: ConsolidationEngine,
    sources: Vec<Box<dyn IAnswerSource>>,
    history: VecDeque<ConversationTurn>,
    config: DialogueConfig,
}

impl Orchestrator {
    /// Orchestrator with the default escalation path: memory recall only.
    pub fn new(store: MemoryStore, engine: ConsolidationEngine, config: DialogueConfig) -> Self {
        Self {
            store,
            engine,
            sources: vec![Box::new(MemorySource)],
            history: VecDeque::new(),
            config,
        }
    }

    /// Attach a local generative fallback after memory recall.
    pub fn with_generative(mut self, model: Box<dyn IGenerativeFallback>) -> Self {
        self.sources.push(Box::new(GenerativeSource::new(model)));
        self
    }

    /// Attach an external knowledge service as the last real source.
    pub fn with_knowledge_service(mut self, service: Box<dyn IKnowledgeService>) -> Self {
        self.sources.push(Box::new(ExternalSource::new(service)));
        self
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Swap in a store, e.g. one restored from a snapshot.
    pub fn replace_store(&mut self, store: MemoryStore) {
        self.store = store;
    }

    pub fn history(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.history.iter()
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }

    /// Handle one user turn.
    pub fn handle_turn(&mut self, input: &str) -> MnemoResult<ConversationTurn> {
        let input = input.trim();

        if let Some(response) = quick::lookup(input) {
            debug!("quick response");
            return Ok(self.record_turn(input, response.to_string(), AnswerSource::Quick));
        }

        let history: Vec<ConversationTurn> = self.history.iter().cloned().collect();
        let effective = anaphora::resolve(input, &history).unwrap_or_else(|| input.to_string());
        if effective != input {
            debug!(resolved = %effective, "anaphora resolved");
        }

        let (answer, source) = match classify(&effective) {
            Utterance::Statement => self.learn(&effective)?,
            Utterance::Question => self.answer(&effective)?,
        };
        Ok(self.record_turn(input, answer, source))
    }

    /// Learn path: the statement becomes (or reinforces) a record.
    fn learn(&mut self, statement: &str) -> MnemoResult<(String, AnswerSource)> {
        match self.store.write(statement, None, None) {
            Ok(id) => {
                info!(id = %id, "learned");
                Ok((format!("기억했어요: {statement}"), AnswerSource::None))
            }
            // write re-classifies; a rejection here is still not an error
            // the user should see.
            Err(MnemoError::Store(StoreError::RejectedInput { .. })) => {
                Ok((UNKNOWN_ANSWER.to_string(), AnswerSource::None))
            }
            Err(e) => Err(e),
        }
    }

    /// Answer path: escalate through the sources, then fall back to a
    /// hedged partial match, then to a fixed unknown response.
    fn answer(&mut self, question: &str) -> MnemoResult<(String, AnswerSource)> {
        let mut ctx = TurnContext {
            question,
            store: &mut self.store,
            config: &self.config,
            partial: None,
        };

        for source in &self.sources {
            match source.try_answer(&mut ctx) {
                Ok(Some(answer)) => {
                    debug!(source = source.name(), "answered");
                    return Ok((answer.text, answer.source));
                }
                Ok(None) => continue,
                Err(e) => {
                    warn!(source = source.name(), error = %e, "answer source failed");
                    continue;
                }
            }
        }

        if let Some((content, score)) = ctx.partial {
            debug!(score, "serving low-confidence partial match");
            return Ok((
                format!("확실하지 않지만, 이런 기억이 있어요: {content}"),
                AnswerSource::Memory,
            ));
        }

        Ok((UNKNOWN_ANSWER.to_string(), AnswerSource::None))
    }

    fn record_turn(
        &mut self,
        question: &str,
        answer: String,
        source: AnswerSource,
    ) -> ConversationTurn {
        let turn = ConversationTurn::new(question.to_string(), answer, source);
        self.history.push_back(turn.clone());
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }
        turn
    }

    /// Run a sleep session of `cycles` consolidation cycles.
    pub fn sleep(&mut self, cycles: u32) -> MnemoResult<ConsolidationSession> {
        self.engine.run_sleep(&mut self.store, cycles)
    }

    /// Sleep for a number of simulated hours.
    pub fn sleep_hours(&mut self, hours: u32) -> MnemoResult<ConsolidationSession> {
        self.sleep(hours * CYCLES_PER_SLEEP_HOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::config::ConsolidationConfig;

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(
            MemoryStore::with_defaults(),
            ConsolidationEngine::new(ConsolidationConfig {
                seed: Some(7),
                ..ConsolidationConfig::default()
            }),
            DialogueConfig::default(),
        )
    }

    #[test]
    fn greeting_takes_the_quick_path() {
        let mut orch = orchestrator();
        let turn = orch.handle_turn("안녕").unwrap();
        assert_eq!(turn.source, AnswerSource::Quick);
        // A greeting never becomes a memory record.
        assert!(orch.store().is_empty());
    }

    #[test]
    fn statement_is_learned_and_confirmed() {
        let mut orch = orchestrator();
        let turn = orch.handle_turn("사과는 빨간색").unwrap();
        assert_eq!(turn.source, AnswerSource::None);
        assert!(turn.answer.contains("기억했어요"));
        assert_eq!(orch.store().len(), 1);
    }

    #[test]
    fn question_never_becomes_a_record() {
        let mut orch = orchestrator();
        let turn = orch.handle_turn("이름이 뭐야?").unwrap();
        assert_eq!(turn.answer, UNKNOWN_ANSWER);
        assert_eq!(turn.source, AnswerSource::None);
        assert!(orch.store().is_empty());
    }

    #[test]
    fn history_is_bounded() {
        let mut orch = Orchestrator::new(
            MemoryStore::with_defaults(),
            ConsolidationEngine::new(ConsolidationConfig::default()),
            DialogueConfig {
                history_limit: 3,
                ..DialogueConfig::default()
            },
        );
        for i in 0..10 {
            orch.handle_turn(&format!("기억 {i}번은 소중하다")).unwrap();
        }
        assert_eq!(orch.history().count(), 3);
    }
}
