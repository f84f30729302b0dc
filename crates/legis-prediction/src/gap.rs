//! Legislative gap: divergence of debate tone from the realized outcome.

use legis_core::constants::STANCE_THRESHOLD;
use legis_core::models::{round_to, EvidenceRecord, GapAssessment, GapLevel};

/// Measure how far the discussion-based expectation diverged from what
/// actually happened:
///
/// `gap = |coop_expectation − real_pass_rate| × speech_confidence × direction_confidence`
///
/// A raw mismatch only evidences a gap when the debate was substantial
/// (`speech_confidence`) and leaned clearly one way
/// (`direction_confidence`). Thin or ambiguous debate zeroes the gap no
/// matter how large the raw distance.
pub fn assess_gap(
    evidence: &[EvidenceRecord],
    coop_expectation: f64,
    speech_confidence: f64,
) -> GapAssessment {
    let real_pass_rate = if evidence.is_empty() {
        0.0
    } else {
        evidence.iter().map(|r| f64::from(r.label)).sum::<f64>() / evidence.len() as f64
    };

    let raw_gap = (coop_expectation - real_pass_rate).abs();

    // Directional mass on each side of the neutral band. Speech volume
    // times signal magnitude, so a loud clear bill counts more than a
    // quiet one.
    let mut coop_strength = 0.0;
    let mut noncoop_strength = 0.0;
    for record in evidence {
        let mass = record.n_speeches as f64 * record.avg_score_prob.abs();
        if record.avg_score_prob > STANCE_THRESHOLD {
            coop_strength += mass;
        } else if record.avg_score_prob < -STANCE_THRESHOLD {
            noncoop_strength += mass;
        }
    }

    let direction_total = coop_strength + noncoop_strength;
    let direction_confidence = if direction_total == 0.0 {
        // All-neutral debate has no lean; the gap cannot be attributed to
        // a deliberate omission.
        0.0
    } else {
        (coop_strength - noncoop_strength).abs() / direction_total
    };

    let score = raw_gap * speech_confidence * direction_confidence;

    GapAssessment {
        score: round_to(score, 4),
        level: GapLevel::from_score(score),
    }
}
