//! Evidence weighting: how much to trust each precedent.

use legis_core::models::{CandidatePrecedent, EvidenceRecord};

/// Trust weight for a single precedent:
///
/// `similarity × ln(1 + max(n_speeches, 1)) × (1 + alpha × |avg_score_prob|)`
///
/// Similarity alone is not enough — a highly similar bill that was barely
/// discussed, or discussed in perfectly neutral tones, is weaker evidence
/// than one with substantial, clearly-signed debate. The log keeps very
/// heavily discussed bills from dominating. The weight is not a
/// probability; it only scales how much this precedent counts.
pub fn evidence_weight(record: &EvidenceRecord, alpha: f64) -> f64 {
    let speech_factor = (1.0 + record.n_speeches.max(1) as f64).ln();
    let signal_strength = 1.0 + alpha * record.avg_score_prob.abs();
    record.similarity * speech_factor * signal_strength
}

/// Admit raw candidates as evidence: sanitize each one, then attach its
/// trust weight. Preserves input order; rows are never deduplicated — a
/// re-discussed bill appearing twice counts twice.
pub fn weigh_candidates(candidates: &[CandidatePrecedent], alpha: f64) -> Vec<EvidenceRecord> {
    candidates
        .iter()
        .map(|c| {
            let mut record = EvidenceRecord::from_candidate(c);
            record.weight = evidence_weight(&record, alpha);
            record
        })
        .collect()
}
