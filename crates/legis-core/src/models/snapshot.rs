use serde::{Deserialize, Serialize};

/// One row of the read-only historical dataset: bill metadata plus the
/// precomputed embedding of its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSnapshot {
    pub bill_number: String,
    pub bill_name: String,
    /// Mean cooperation score of recorded debate, in [-1, 1].
    pub avg_score_prob: f64,
    /// Number of recorded utterances.
    pub n_speeches: u64,
    /// Final outcome: 1 = passed, 0 = did not pass.
    pub label: u8,
    /// Embedding produced by the same model used for query embedding.
    pub embedding: Vec<f32>,
}
