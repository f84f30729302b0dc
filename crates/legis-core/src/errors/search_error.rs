/// Similarity search errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("query vector is empty")]
    EmptyQueryVector,

    #[error("vector dimension mismatch: query has {query}, dataset has {dataset}")]
    DimensionMismatch { query: usize, dataset: usize },
}
