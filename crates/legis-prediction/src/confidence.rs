//! Confidence in the evidence base, independent of the probability value.

use legis_core::constants::{CONFIDENCE_COUNT_SATURATION, CONFIDENCE_WEIGHT_SATURATION};
use legis_core::models::{round_to, ConfidenceAssessment, ConfidenceLevel, EvidenceRecord};

/// Score how trustworthy the estimate as a whole is:
///
/// `0.4·min(count/10, 1) + 0.4·mean(similarity) + 0.2·min(total_weight/5, 1)`
///
/// rounded to 3 decimal places. This is deliberately independent of the
/// probability computation: an estimate can be high-confidence and
/// high-gap at the same time, and the two must never be conflated.
pub fn assess_confidence(evidence: &[EvidenceRecord], total_weight: f64) -> ConfidenceAssessment {
    let count_term = (evidence.len() as f64 / CONFIDENCE_COUNT_SATURATION).min(1.0);

    let mean_similarity = if evidence.is_empty() {
        0.0
    } else {
        evidence.iter().map(|r| r.similarity).sum::<f64>() / evidence.len() as f64
    };

    let weight_term = (total_weight / CONFIDENCE_WEIGHT_SATURATION).min(1.0);

    let score = round_to(0.4 * count_term + 0.4 * mean_similarity + 0.2 * weight_term, 3);

    ConfidenceAssessment {
        score,
        level: ConfidenceLevel::from_score(score),
    }
}
