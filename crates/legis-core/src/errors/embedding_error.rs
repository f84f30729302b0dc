/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("embedding request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("malformed embedding response: {reason}")]
    MalformedResponse { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
