//! Error taxonomy for the workspace.
//!
//! Each subsystem has its own error enum; `LegisError` aggregates them at
//! the crate boundary. Note that "no similar precedent found" is NOT an
//! error anywhere in this taxonomy — it is a valid terminal state of the
//! prediction engine and callers must be able to tell it apart from an
//! upstream failure.

mod dataset_error;
mod embedding_error;
mod search_error;

pub use dataset_error::DatasetError;
pub use embedding_error::EmbeddingError;
pub use search_error::SearchError;

/// Top-level error type aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum LegisError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience result alias used across the workspace.
pub type LegisResult<T> = Result<T, LegisError>;
