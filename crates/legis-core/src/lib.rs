//! # legis-core
//!
//! Foundation crate for the legislative outcome analysis system.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LegisConfig;
pub use errors::{LegisError, LegisResult};
pub use models::{CandidatePrecedent, EvidenceRecord, PredictionResult, Stance};
