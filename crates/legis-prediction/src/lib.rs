//! # legis-prediction
//!
//! The evidence-weighted outcome prediction engine. Given a free-text
//! legislative query, semantically similar historical precedents, and their
//! debate-sentiment statistics, it produces a pass-probability estimate, a
//! legislative gap assessment, an independent confidence score, and a
//! templated rationale — all from fully deterministic, rule-based formulas.
//!
//! The computation is pure and synchronous: no I/O, no shared state, safe to
//! run concurrently for independent queries.

pub mod aggregate;
pub mod blend;
pub mod confidence;
pub mod engine;
pub mod explain;
pub mod gap;
pub mod weighting;

pub use engine::PredictionEngine;
