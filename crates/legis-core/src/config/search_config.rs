use serde::{Deserialize, Serialize};

use crate::constants;

/// Similarity search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Similarity cutoff tried first.
    pub strict_threshold: f64,
    /// Widened cutoff used only when the strict tier yields fewer than
    /// `min_evidence` candidates.
    pub soft_threshold: f64,
    /// Candidate count the strict tier must reach to be accepted.
    pub min_evidence: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strict_threshold: constants::STRICT_SIMILARITY_THRESHOLD,
            soft_threshold: constants::SOFT_SIMILARITY_THRESHOLD,
            min_evidence: constants::MIN_EVIDENCE,
        }
    }
}
