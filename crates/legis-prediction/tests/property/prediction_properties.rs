//! Property tests: the engine is a total, bounded, deterministic function
//! over arbitrary candidate lists.

use legis_core::config::LegisConfig;
use legis_core::models::{CandidatePrecedent, PredictionResult};
use legis_embeddings::HashedProvider;
use legis_prediction::PredictionEngine;
use legis_retrieval::InMemoryDataset;
use proptest::prelude::*;

fn arb_candidate() -> impl Strategy<Value = CandidatePrecedent> {
    (
        "[0-9]{7}",
        0.0f64..=1.0,
        0u64..5000,
        -1.0f64..=1.0,
        0u8..=1,
    )
        .prop_map(|(number, similarity, n_speeches, avg_score_prob, label)| {
            CandidatePrecedent {
                bill_number: number.clone(),
                bill_name: format!("Bill {number}"),
                avg_score_prob,
                n_speeches,
                label,
                similarity,
            }
        })
}

fn predict(candidates: &[CandidatePrecedent]) -> PredictionResult {
    let provider = HashedProvider::new(8);
    let dataset = InMemoryDataset::new(Vec::new());
    let config = LegisConfig::default();
    let engine = PredictionEngine::new(&provider, &dataset, &config);
    engine.predict_from_candidates("property query", candidates)
}

proptest! {
    /// Probability, gap, and confidence always land in their documented
    /// ranges, for any non-empty evidence set.
    #[test]
    fn outputs_are_bounded(candidates in proptest::collection::vec(arb_candidate(), 1..30)) {
        let result = predict(&candidates);

        let p = result.predicted_pass_probability.unwrap();
        prop_assert!((0.01..=0.99).contains(&p));

        let gap = result.legislative_gap.unwrap();
        prop_assert!(gap.score >= 0.0);

        let confidence = result.confidence.unwrap();
        prop_assert!((0.0..=1.0).contains(&confidence.score));

        prop_assert_eq!(result.evidence_bills.len(), candidates.len());
    }

    /// Pure function: same candidates, same result.
    #[test]
    fn prediction_is_deterministic(candidates in proptest::collection::vec(arb_candidate(), 0..20)) {
        prop_assert_eq!(predict(&candidates), predict(&candidates));
    }

    /// Every weight is finite and non-negative.
    #[test]
    fn weights_are_finite_and_non_negative(candidates in proptest::collection::vec(arb_candidate(), 1..30)) {
        let result = predict(&candidates);
        for record in &result.evidence_bills {
            prop_assert!(record.weight.is_finite());
            prop_assert!(record.weight >= 0.0);
        }
    }

    /// Candidates entirely inside the neutral band can never evidence a gap.
    #[test]
    fn neutral_only_evidence_has_zero_gap(
        mut candidates in proptest::collection::vec(arb_candidate(), 1..20),
        scores in proptest::collection::vec(-0.05f64..=0.05, 20),
    ) {
        for (candidate, score) in candidates.iter_mut().zip(&scores) {
            candidate.avg_score_prob = *score;
        }
        let result = predict(&candidates);
        prop_assert_eq!(result.legislative_gap.unwrap().score, 0.0);
    }
}
