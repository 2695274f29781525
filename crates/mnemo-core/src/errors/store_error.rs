/// Record store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("interrogative content rejected: {content}")]
    RejectedInput { content: String },

    #[error("duplicate record id generated: {id}")]
    DuplicateId { id: String },

    #[error("snapshot corrupt: {details}")]
    CorruptSnapshot { details: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
