//! Numeric thresholds and tuning constants for the prediction engine.
//!
//! Every literal that appears in a formula lives here so boundary values
//! can be tested exhaustively.

/// System version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-record stance threshold: |avg_score_prob| at or below this is neutral.
pub const STANCE_THRESHOLD: f64 = 0.05;

/// Dominant-tone threshold used only by the explanation sentence.
///
/// Deliberately tighter than [`STANCE_THRESHOLD`]; the two are tuned
/// independently and must not be unified.
pub const DOMINANT_TONE_THRESHOLD: f64 = 0.03;

/// Signal-strength multiplier in the evidence weight formula.
pub const WEIGHT_ALPHA: f64 = 1.5;

/// Blend weight for the historical-outcome signal.
pub const DATA_WEIGHT: f64 = 0.6;

/// Blend weight for the debate-tone signal.
pub const DISCUSSION_WEIGHT: f64 = 0.4;

/// Total speech count at which discussion confidence saturates to 1.0.
pub const SPEECH_SATURATION: u64 = 1000;

/// Lower clip bound for the predicted pass probability.
pub const PROB_FLOOR: f64 = 0.01;

/// Upper clip bound for the predicted pass probability.
pub const PROB_CEILING: f64 = 0.99;

/// Neutral prior used whenever the evidence is too thin to trust.
pub const NEUTRAL_PRIOR: f64 = 0.5;

/// Evidence count at which the count term of the confidence score saturates.
pub const CONFIDENCE_COUNT_SATURATION: f64 = 10.0;

/// Total weight at which the weight term of the confidence score saturates.
pub const CONFIDENCE_WEIGHT_SATURATION: f64 = 5.0;

/// Similarity cutoff tried first by the tiered search.
pub const STRICT_SIMILARITY_THRESHOLD: f64 = 0.60;

/// Widened similarity cutoff used when the strict tier is too sparse.
pub const SOFT_SIMILARITY_THRESHOLD: f64 = 0.45;

/// Minimum candidate count the strict tier must yield before it is accepted.
pub const MIN_EVIDENCE: usize = 5;
