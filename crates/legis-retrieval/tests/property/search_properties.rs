//! Property tests for the tiered cutoff and cosine similarity.

use legis_retrieval::cutoff::{Tier, TieredCutoff};
use legis_retrieval::similarity;
use proptest::prelude::*;

proptest! {
    /// Every admitted index clears at least the soft cutoff.
    #[test]
    fn admission_never_goes_below_the_soft_cutoff(
        sims in proptest::collection::vec(0.0f64..=1.0, 0..50)
    ) {
        let cutoff = TieredCutoff::new(0.60, 0.45, 5);
        let (hits, _) = cutoff.select(&sims);
        for i in hits {
            prop_assert!(sims[i] >= 0.45);
        }
    }

    /// The strict tier is only accepted when it satisfies min_evidence.
    #[test]
    fn strict_tier_implies_min_evidence(
        sims in proptest::collection::vec(0.0f64..=1.0, 0..50)
    ) {
        let cutoff = TieredCutoff::new(0.60, 0.45, 5);
        let (hits, tier) = cutoff.select(&sims);
        if tier == Tier::Strict {
            prop_assert!(hits.len() >= 5);
            for i in hits {
                prop_assert!(sims[i] >= 0.60);
            }
        }
    }

    /// Cosine similarity is symmetric and bounded.
    #[test]
    fn cosine_is_symmetric_and_bounded(
        (a, b) in (1usize..16).prop_flat_map(|n| (
            proptest::collection::vec(-10.0f32..10.0, n),
            proptest::collection::vec(-10.0f32..10.0, n),
        ))
    ) {
        let ab = similarity::cosine(&a, &b).unwrap();
        let ba = similarity::cosine(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-9);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&ab));
    }
}
