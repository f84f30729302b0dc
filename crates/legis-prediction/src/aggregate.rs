//! Outcome and discussion aggregation over the evidence list.
//!
//! Two independent single-pass accumulations: one over realized outcomes
//! (weighted), one over debate tone (unweighted mean, damped by total
//! discussion volume). Neither depends on the other.

use legis_core::constants::NEUTRAL_PRIOR;
use legis_core::models::EvidenceRecord;

/// Weighted aggregation of realized pass/fail outcomes.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeSummary {
    /// Weighted pass rate in [0, 1]; 0.5 when no weight exists.
    pub data_pass_prob: f64,
    /// Sum of evidence weights, reused by the confidence scorer.
    pub total_weight: f64,
}

/// Weighted pass rate: `Σ weight·label / Σ weight`. When every weight is
/// zero there is nothing strong enough to move off the neutral prior, so
/// the result is exactly 0.5.
pub fn aggregate_outcomes(evidence: &[EvidenceRecord]) -> OutcomeSummary {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for record in evidence {
        weighted_sum += record.weight * f64::from(record.label);
        total_weight += record.weight;
    }

    let data_pass_prob = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        NEUTRAL_PRIOR
    };

    OutcomeSummary {
        data_pass_prob,
        total_weight,
    }
}

/// Aggregation of debate tone and volume.
#[derive(Debug, Clone, Copy)]
pub struct DiscussionSummary {
    /// Unweighted mean cooperation score in [-1, 1].
    pub mean_score: f64,
    /// The mean rescaled into [0, 1]: expectation of cooperation.
    pub coop_expectation: f64,
    /// Total recorded utterances across the evidence.
    pub total_speeches: u64,
    /// Trust in the discussion signal, saturating at `saturation` speeches.
    pub speech_confidence: f64,
    /// Tone-based pass probability, collapsed toward 0.5 when thin.
    pub discussion_based_prob: f64,
}

/// Single pass over the evidence: mean tone, total volume, and the derived
/// discussion-based probability. With near-zero discussion the probability
/// collapses to the neutral prior regardless of what little tone exists —
/// thin debate is not trusted in either direction.
pub fn aggregate_discussion(evidence: &[EvidenceRecord], saturation: u64) -> DiscussionSummary {
    let mut score_sum = 0.0;
    let mut total_speeches = 0u64;
    for record in evidence {
        score_sum += record.avg_score_prob;
        total_speeches += record.n_speeches;
    }

    let mean_score = if evidence.is_empty() {
        0.0
    } else {
        score_sum / evidence.len() as f64
    };
    let coop_expectation = (mean_score + 1.0) / 2.0;

    let speech_confidence =
        ((1.0 + total_speeches as f64).ln() / (1.0 + saturation as f64).ln()).min(1.0);

    let discussion_based_prob =
        speech_confidence * coop_expectation + (1.0 - speech_confidence) * NEUTRAL_PRIOR;

    DiscussionSummary {
        mean_score,
        coop_expectation,
        total_speeches,
        speech_confidence,
        discussion_based_prob,
    }
}
