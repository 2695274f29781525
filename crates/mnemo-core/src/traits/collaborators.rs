use crate::errors::MnemoResult;

/// Local generative text model, invoked only as a fallback answer source.
///
/// Any failure is treated by the orchestrator as "skip to the next
/// escalation step", never as fatal.
pub trait IGenerativeFallback: Send + Sync {
    /// Generate a short answer for the prompt.
    fn generate(&self, prompt: &str) -> MnemoResult<String>;

    /// Whether the model is currently loaded and usable.
    fn is_available(&self) -> bool {
        true
    }
}

/// External knowledge service, the last real answer source on the
/// escalation path. Successful answers are written back into the store.
pub trait IKnowledgeService: Send + Sync {
    /// Ask the service a question. Returns `MnemoError::Unavailable` when
    /// the service cannot answer; the orchestrator then falls through.
    fn ask(&self, question: &str) -> MnemoResult<String>;
}
