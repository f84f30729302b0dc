//! Trait seams between the engine and its external collaborators.

mod dataset;
mod embedding;

pub use dataset::IHistoricalDataset;
pub use embedding::IEmbeddingProvider;
