//! Answer sources on the escalation path.
//!
//! Each source either produces an [`Answer`], declines (`Ok(None)`), or
//! fails; the orchestrator logs failures and falls through to the next
//! source. Recall hits below the acceptance threshold but above the
//! low-confidence floor are parked in the turn context as a partial match.

use tracing::debug;

use mnemo_core::classify::{classify, Utterance};
use mnemo_core::config::DialogueConfig;
use mnemo_core::errors::{MnemoError, MnemoResult, StoreError};
use mnemo_core::models::AnswerSource;
use mnemo_core::traits::{IGenerativeFallback, IKnowledgeService};
use mnemo_store::MemoryStore;

use crate::phrasing;

/// A resolved answer and where it came from.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

/// Mutable state threaded through one answer escalation.
pub struct TurnContext<'a> {
    pub question: &'a str,
    pub store: &'a mut MemoryStore,
    pub config: &'a DialogueConfig,
    /// Best recall hit below the acceptance threshold, kept for hedged
    /// phrasing when every source declines.
    pub partial: Option<(String, f64)>,
}

/// One step of the answer escalation pipeline.
pub trait IAnswerSource: Send {
    fn name(&self) -> &'static str;

    /// Try to answer. `Ok(None)` means "decline, escalate further".
    fn try_answer(&self, ctx: &mut TurnContext<'_>) -> MnemoResult<Option<Answer>>;
}

/// Ranked recall from the memory store.
pub struct MemorySource;

impl MemorySource {
    /// Recalled content must itself be a clean statement. Interrogative or
    /// fragmentary content never leaves the store as an answer, even if a
    /// tampered snapshot smuggled it in.
    fn answerable(content: &str) -> bool {
        content.chars().count() >= 2 && classify(content) == Utterance::Statement
    }
}

impl IAnswerSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn try_answer(&self, ctx: &mut TurnContext<'_>) -> MnemoResult<Option<Answer>> {
        // The trailing question mark is classification signal, not recall
        // signal; stripping it lets the cue tokens match stored statements.
        let cue = ctx.question.trim_end_matches(['?', '？']).trim_end();
        let hits = ctx.store.query(cue, 3)?;
        for hit in &hits {
            if !Self::answerable(&hit.record.content) {
                debug!(id = %hit.record.id, "skipping unanswerable recall hit");
                continue;
            }
            if hit.score >= ctx.config.acceptance_threshold {
                // Accepted recall is rephrased as a complete sentence, never
                // echoed back verbatim.
                return Ok(Some(Answer {
                    text: phrasing::render(&hit.record.content),
                    source: AnswerSource::Memory,
                }));
            }
            if hit.score >= ctx.config.low_confidence_threshold && ctx.partial.is_none() {
                ctx.partial = Some((hit.record.content.clone(), hit.score));
            }
        }
        Ok(None)
    }
}

/// Local generative model, gated by config and model availability.
pub struct GenerativeSource {
    model: Box<dyn IGenerativeFallback>,
}

impl GenerativeSource {
    pub fn new(model: Box<dyn IGenerativeFallback>) -> Self {
        Self { model }
    }
}

impl IAnswerSource for GenerativeSource {
    fn name(&self) -> &'static str {
        "generative"
    }

    fn try_answer(&self, ctx: &mut TurnContext<'_>) -> MnemoResult<Option<Answer>> {
        if !ctx.config.generative_enabled || !self.model.is_available() {
            return Ok(None);
        }
        let text = self.model.generate(ctx.question)?;
        Ok(Some(Answer {
            text,
            source: AnswerSource::Generative,
        }))
    }
}

/// External knowledge service. Successful answers are written back into
/// the store at elevated importance so the next recall can serve them
/// without going external again.
pub struct ExternalSource {
    service: Box<dyn IKnowledgeService>,
}

impl ExternalSource {
    pub fn new(service: Box<dyn IKnowledgeService>) -> Self {
        Self { service }
    }
}

impl IAnswerSource for ExternalSource {
    fn name(&self) -> &'static str {
        "external"
    }

    fn try_answer(&self, ctx: &mut TurnContext<'_>) -> MnemoResult<Option<Answer>> {
        let text = match self.service.ask(ctx.question) {
            Ok(text) => text,
            Err(MnemoError::Unavailable { reason }) => {
                debug!(reason = %reason, "external service declined");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        match ctx.store.write(
            &text,
            None,
            Some(ctx.config.external_writeback_importance),
        ) {
            Ok(id) => debug!(id = %id, "external answer written back"),
            // An interrogative external answer is served but never stored.
            Err(MnemoError::Store(StoreError::RejectedInput { .. })) => {
                debug!("external answer rejected by the contamination filter")
            }
            Err(e) => return Err(e),
        }

        Ok(Some(Answer {
            text,
            source: AnswerSource::External,
        }))
    }
}
