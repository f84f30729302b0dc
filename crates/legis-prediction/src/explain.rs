//! Templated natural-language rationale.

use legis_core::constants::DOMINANT_TONE_THRESHOLD;
use legis_core::models::GapLevel;

/// Fixed explanation for the no-evidence terminal state.
pub const NO_EVIDENCE_EXPLANATION: &str =
    "No similar historical bill could be found for this query.";

/// Dominant tone of the whole evidence set, from the unrescaled mean
/// cooperation score against the ±0.03 threshold.
///
/// This threshold is intentionally tighter than the ±0.05 per-precedent
/// stance band and the two must stay distinct.
fn dominant_tone(mean_score: f64) -> &'static str {
    if mean_score > DOMINANT_TONE_THRESHOLD {
        "cooperative-leaning"
    } else if mean_score < -DOMINANT_TONE_THRESHOLD {
        "adversarial-leaning"
    } else {
        "neutral"
    }
}

/// Compose the one-sentence rationale. Only echoes values that were already
/// computed upstream; no new numbers are introduced here.
pub fn compose(
    query: &str,
    evidence_count: usize,
    total_speeches: u64,
    mean_score: f64,
    gap_level: GapLevel,
) -> String {
    format!(
        "The query '{query}' was analyzed against {evidence_count} similar historical bills \
         and {total_speeches} recorded speeches. The overall debate tone was '{tone}' and the \
         legislative gap level is assessed as '{gap_level}'.",
        tone = dominant_tone(mean_score),
    )
}
