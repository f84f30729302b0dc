use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::EvidenceRecord;

/// Severity bucket for the legislative gap score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapLevel {
    /// Debate and outcome essentially agree.
    Minimal,
    /// Weak mismatch.
    Low,
    /// Meaningful divergence.
    Moderate,
    /// Structural divergence.
    High,
    /// Severe legislative gap.
    Severe,
}

/// Upper-exclusive score bound for each gap level below `Severe`.
const GAP_LEVEL_TABLE: [(f64, GapLevel); 4] = [
    (0.08, GapLevel::Minimal),
    (0.18, GapLevel::Low),
    (0.30, GapLevel::Moderate),
    (0.45, GapLevel::High),
];

impl GapLevel {
    /// Bucket a gap score. Scores at a boundary fall into the higher bucket.
    pub fn from_score(score: f64) -> Self {
        for (bound, level) in GAP_LEVEL_TABLE {
            if score < bound {
                return level;
            }
        }
        GapLevel::Severe
    }
}

impl fmt::Display for GapLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GapLevel::Minimal => "minimal",
            GapLevel::Low => "low",
            GapLevel::Moderate => "moderate",
            GapLevel::High => "high",
            GapLevel::Severe => "severe",
        };
        f.write_str(s)
    }
}

/// Quality bucket for the evidence-base confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// Lower-inclusive score bound for each level above `Low`.
const CONFIDENCE_LEVEL_TABLE: [(f64, ConfidenceLevel); 2] = [
    (0.7, ConfidenceLevel::High),
    (0.4, ConfidenceLevel::Medium),
];

impl ConfidenceLevel {
    /// Bucket a confidence score. Scores at a boundary take the higher level.
    pub fn from_score(score: f64) -> Self {
        for (bound, level) in CONFIDENCE_LEVEL_TABLE {
            if score >= bound {
                return level;
            }
        }
        ConfidenceLevel::Low
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        };
        f.write_str(s)
    }
}

/// Legislative gap: how far debate tone diverged from the realized outcome,
/// scaled by discussion substance and directional clarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAssessment {
    pub score: f64,
    pub level: GapLevel,
}

/// Quality measure of the evidence base itself, independent of the
/// probability value. High confidence with high gap is a valid combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    pub score: f64,
    pub level: ConfidenceLevel,
}

/// Complete result of one prediction query. Created fresh per request and
/// never mutated or persisted by the engine.
///
/// All numeric fields are `None` on the no-evidence path; `explanation` is
/// always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// The free-text query, echoed verbatim.
    pub query: String,
    /// Pass probability clipped into [0.01, 0.99].
    pub predicted_pass_probability: Option<f64>,
    pub legislative_gap: Option<GapAssessment>,
    pub confidence: Option<ConfidenceAssessment>,
    /// Human-readable rationale, always present.
    pub explanation: String,
    /// Evidence actually used, ordered by similarity descending.
    pub evidence_bills: Vec<EvidenceRecord>,
}
