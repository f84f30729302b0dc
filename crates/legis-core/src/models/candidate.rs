use serde::{Deserialize, Serialize};

/// A historical bill offered as evidence for a query, as produced by the
/// similarity search. Field values are taken as-is from the upstream
/// dataset; sanitization happens when an [`EvidenceRecord`] is derived.
///
/// [`EvidenceRecord`]: crate::models::EvidenceRecord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePrecedent {
    /// Opaque bill identifier (e.g. a parliamentary docket number).
    pub bill_number: String,
    /// Human-readable bill title.
    pub bill_name: String,
    /// Mean cooperation score of recorded debate, in [-1, 1].
    /// Positive is cooperative tone, negative is adversarial.
    pub avg_score_prob: f64,
    /// Number of recorded utterances about this bill.
    pub n_speeches: u64,
    /// Final outcome: 1 = passed, 0 = did not pass.
    pub label: u8,
    /// Semantic closeness to the query, in [0, 1].
    pub similarity: f64,
}

impl CandidatePrecedent {
    /// Whether the bill ultimately passed.
    pub fn passed(&self) -> bool {
        self.label == 1
    }
}
