//! Data models owned by the analysis engine.

mod candidate;
mod evidence;
mod prediction;
mod snapshot;

pub use candidate::CandidatePrecedent;
pub use evidence::{EvidenceRecord, Stance};
pub use prediction::{
    ConfidenceAssessment, ConfidenceLevel, GapAssessment, GapLevel, PredictionResult,
};
pub use snapshot::BillSnapshot;

/// Round to a fixed number of decimal places for wire output.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
