//! Final probability blend of the data-driven and discussion-driven signals.

use legis_core::config::PredictionConfig;

/// Merge the two probability signals, damped by discussion confidence:
///
/// `(1 − speech_confidence)·0.5 + speech_confidence·(0.6·data + 0.4·discussion)`
///
/// Realized outcomes outweigh debate tone (tone can be overridden by
/// procedural or coalition factors the speech record never sees), but with
/// little discussion neither signal is trusted and the estimate stays near
/// the neutral prior. The result is clipped into [0.01, 0.99]: precedent
/// reasoning never claims certainty in either direction.
pub fn blend(
    data_pass_prob: f64,
    discussion_based_prob: f64,
    speech_confidence: f64,
    config: &PredictionConfig,
) -> f64 {
    let blended = (1.0 - speech_confidence) * 0.5
        + speech_confidence
            * (config.data_weight * data_pass_prob
                + config.discussion_weight * discussion_based_prob);

    blended.clamp(config.prob_floor, config.prob_ceiling)
}
