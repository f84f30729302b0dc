use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::STANCE_THRESHOLD;
use crate::models::{round_to, CandidatePrecedent};

/// Categorical debate-tone label for a single precedent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Cooperative,
    Adversarial,
    Neutral,
}

impl Stance {
    /// Classify a cooperation score against the ±0.05 threshold.
    ///
    /// This is a pure function of the score; callers must never cache a
    /// stance separately from the score it was derived from.
    pub fn from_score(avg_score_prob: f64) -> Self {
        if avg_score_prob > STANCE_THRESHOLD {
            Stance::Cooperative
        } else if avg_score_prob < -STANCE_THRESHOLD {
            Stance::Adversarial
        } else {
            Stance::Neutral
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stance::Cooperative => "cooperative",
            Stance::Adversarial => "adversarial",
            Stance::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// A candidate precedent after admission into the evidence set: carries the
/// computed trust weight and the derived stance label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub bill_number: String,
    pub bill_name: String,
    pub avg_score_prob: f64,
    pub n_speeches: u64,
    pub label: u8,
    pub similarity: f64,
    pub stance: Stance,
    /// Trust weight (§ evidence weighting). Internal only — the wire
    /// contract for `evidence_bills` does not carry it.
    #[serde(skip)]
    pub weight: f64,
}

impl EvidenceRecord {
    /// Derive an evidence record from a raw candidate, sanitizing malformed
    /// upstream data: a non-finite cooperation score is treated as zero
    /// signal (neutral stance), and similarity is clamped into [0, 1].
    /// Evidence sourcing is outside this engine's control, so bad values
    /// degrade, never panic.
    ///
    /// `weight` is filled in by the weighting stage.
    pub fn from_candidate(candidate: &CandidatePrecedent) -> Self {
        let score = if candidate.avg_score_prob.is_finite() {
            candidate.avg_score_prob.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let similarity = if candidate.similarity.is_finite() {
            candidate.similarity.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            bill_number: candidate.bill_number.clone(),
            bill_name: candidate.bill_name.clone(),
            avg_score_prob: score,
            n_speeches: candidate.n_speeches,
            label: candidate.label.min(1),
            similarity: round_to(similarity, 4),
            stance: Stance::from_score(score),
            weight: 0.0,
        }
    }

    /// Whether the bill ultimately passed.
    pub fn passed(&self) -> bool {
        self.label == 1
    }
}
