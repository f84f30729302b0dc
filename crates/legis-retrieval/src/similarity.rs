//! Cosine similarity over embedding slices.

use legis_core::errors::{LegisResult, SearchError};

/// Cosine similarity of two vectors of equal dimension.
///
/// A zero-norm vector has no direction, so any comparison against it scores
/// 0.0 rather than producing NaN.
pub fn cosine(a: &[f32], b: &[f32]) -> LegisResult<f64> {
    if a.is_empty() {
        return Err(SearchError::EmptyQueryVector.into());
    }
    if a.len() != b.len() {
        return Err(SearchError::DimensionMismatch {
            query: a.len(),
            dataset: b.len(),
        }
        .into());
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f64::EPSILON {
        return Ok(0.0);
    }

    Ok(dot / denom)
}
