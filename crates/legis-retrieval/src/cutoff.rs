//! Two-tier similarity cutoff with a minimum-evidence guarantee.

use tracing::debug;

/// Tiered admission strategy: the strict cutoff is tried first and the soft
/// cutoff only when the strict tier yields fewer than `min_evidence` rows —
/// never the reverse. If even the soft tier admits nothing, the result is
/// empty and the caller takes the no-evidence path.
#[derive(Debug, Clone)]
pub struct TieredCutoff {
    pub strict: f64,
    pub soft: f64,
    pub min_evidence: usize,
}

/// Which tier ended up supplying the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Strict,
    Soft,
}

impl TieredCutoff {
    pub fn new(strict: f64, soft: f64, min_evidence: usize) -> Self {
        debug_assert!(soft <= strict, "soft cutoff must not exceed strict cutoff");
        Self {
            strict,
            soft,
            min_evidence,
        }
    }

    /// Select admitted indices from a slice of similarity scores.
    ///
    /// Returns the indices whose score clears the chosen tier, along with
    /// the tier that was used.
    pub fn select(&self, similarities: &[f64]) -> (Vec<usize>, Tier) {
        let strict_hits: Vec<usize> = indices_at_or_above(similarities, self.strict);
        if strict_hits.len() >= self.min_evidence {
            return (strict_hits, Tier::Strict);
        }

        debug!(
            strict_hits = strict_hits.len(),
            min_evidence = self.min_evidence,
            "strict tier too sparse, widening to soft cutoff"
        );
        (indices_at_or_above(similarities, self.soft), Tier::Soft)
    }
}

fn indices_at_or_above(similarities: &[f64], cutoff: f64) -> Vec<usize> {
    similarities
        .iter()
        .enumerate()
        .filter(|(_, s)| **s >= cutoff)
        .map(|(i, _)| i)
        .collect()
}
