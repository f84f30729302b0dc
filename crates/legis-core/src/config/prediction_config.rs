use serde::{Deserialize, Serialize};

use crate::constants;

/// Prediction engine tuning.
///
/// These defaults are the deployed values; they are configuration so that
/// analysts can re-run historical studies with alternative tunings, not
/// parameters fitted from data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Signal-strength multiplier in the evidence weight formula.
    pub alpha: f64,
    /// Blend weight for the historical-outcome signal.
    pub data_weight: f64,
    /// Blend weight for the debate-tone signal.
    pub discussion_weight: f64,
    /// Total speech count at which discussion confidence saturates.
    pub speech_saturation: u64,
    /// Lower clip bound for the predicted probability.
    pub prob_floor: f64,
    /// Upper clip bound for the predicted probability.
    pub prob_ceiling: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            alpha: constants::WEIGHT_ALPHA,
            data_weight: constants::DATA_WEIGHT,
            discussion_weight: constants::DISCUSSION_WEIGHT,
            speech_saturation: constants::SPEECH_SATURATION,
            prob_floor: constants::PROB_FLOOR,
            prob_ceiling: constants::PROB_CEILING,
        }
    }
}
