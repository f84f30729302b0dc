/// Historical dataset access errors.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to load dataset: {reason}")]
    LoadFailed { reason: String },

    #[error("dataset row {row} has embedding of dimension {actual}, expected {expected}")]
    InconsistentEmbedding {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
