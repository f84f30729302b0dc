//! # legis-retrieval
//!
//! Similarity search over the historical bill snapshot. Scores every row
//! against the query embedding with cosine similarity and admits candidates
//! through a two-tier cutoff: strict first, widened to soft only when the
//! strict tier is too sparse to support a prediction.

pub mod cutoff;
pub mod dataset;
pub mod searcher;
pub mod similarity;

pub use cutoff::TieredCutoff;
pub use dataset::InMemoryDataset;
pub use searcher::SimilaritySearcher;
