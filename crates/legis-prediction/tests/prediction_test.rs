use legis_core::config::LegisConfig;
use legis_core::models::{
    BillSnapshot, CandidatePrecedent, ConfidenceLevel, GapLevel, PredictionResult, Stance,
};
use legis_core::traits::{IEmbeddingProvider, IHistoricalDataset};
use legis_embeddings::HashedProvider;
use legis_prediction::PredictionEngine;
use legis_retrieval::InMemoryDataset;

// ── Helpers ───────────────────────────────────────────────────────────────

fn candidate(
    number: &str,
    similarity: f64,
    n_speeches: u64,
    avg_score_prob: f64,
    label: u8,
) -> CandidatePrecedent {
    CandidatePrecedent {
        bill_number: number.to_string(),
        bill_name: format!("Bill {number}"),
        avg_score_prob,
        n_speeches,
        label,
        similarity,
    }
}

/// Engine over an empty dataset, for exercising the pure candidate path.
fn engine_fixture() -> (HashedProvider, InMemoryDataset, LegisConfig) {
    (
        HashedProvider::new(32),
        InMemoryDataset::new(Vec::new()),
        LegisConfig::default(),
    )
}

fn predict(candidates: &[CandidatePrecedent]) -> PredictionResult {
    let (provider, dataset, config) = engine_fixture();
    let engine = PredictionEngine::new(&provider, &dataset, &config);
    engine.predict_from_candidates("test query", candidates)
}

// ── No-evidence path ──────────────────────────────────────────────────────

#[test]
fn empty_candidates_short_circuit_to_the_no_evidence_result() {
    let result = predict(&[]);
    assert_eq!(result.query, "test query");
    assert!(result.predicted_pass_probability.is_none());
    assert!(result.legislative_gap.is_none());
    assert!(result.confidence.is_none());
    assert!(result.evidence_bills.is_empty());
    assert_eq!(
        result.explanation,
        "No similar historical bill could be found for this query."
    );
}

#[test]
fn end_to_end_empty_dataset_is_no_evidence_not_error() {
    let (provider, dataset, config) = engine_fixture();
    let engine = PredictionEngine::new(&provider, &dataset, &config);
    let result = engine.predict("any legislative keyword").unwrap();
    assert!(result.predicted_pass_probability.is_none());
    assert!(result.evidence_bills.is_empty());
}

// ── Determinism and bounds ────────────────────────────────────────────────

#[test]
fn identical_inputs_yield_identical_results() {
    let candidates = vec![
        candidate("1", 0.9, 120, 0.4, 1),
        candidate("2", 0.7, 30, -0.2, 0),
        candidate("3", 0.65, 0, 0.0, 1),
    ];
    assert_eq!(predict(&candidates), predict(&candidates));
}

#[test]
fn probability_stays_inside_the_clip_bounds() {
    // All passed, strongly cooperative, huge volume: pushes toward 1.0.
    let optimistic: Vec<_> = (0..10)
        .map(|i| candidate(&i.to_string(), 1.0, 10_000, 1.0, 1))
        .collect();
    let p = predict(&optimistic).predicted_pass_probability.unwrap();
    assert!(p <= 0.99);

    // All failed, strongly adversarial: pushes toward 0.0.
    let pessimistic: Vec<_> = (0..10)
        .map(|i| candidate(&i.to_string(), 1.0, 10_000, -1.0, 0))
        .collect();
    let p = predict(&pessimistic).predicted_pass_probability.unwrap();
    assert!(p >= 0.01);
}

// ── Fallback rules ────────────────────────────────────────────────────────

#[test]
fn zero_similarity_everywhere_neutralizes_the_outcome_signal() {
    // Every weight is 0, so the data-driven probability is exactly the
    // neutral prior and the blend reduces to the discussion-only form.
    let candidates = vec![
        candidate("1", 0.0, 100, 0.5, 1),
        candidate("2", 0.0, 100, 0.5, 1),
    ];
    let result = predict(&candidates);
    assert!(result.evidence_bills.iter().all(|e| e.weight == 0.0));

    let sc = (201f64).ln() / (1001f64).ln();
    let disc = sc * 0.75 + (1.0 - sc) * 0.5;
    let expected = (1.0 - sc) * 0.5 + sc * (0.6 * 0.5 + 0.4 * disc);
    let p = result.predicted_pass_probability.unwrap();
    assert!((p - (expected * 1e4).round() / 1e4).abs() < 1e-12);
}

#[test]
fn zero_discussion_collapses_the_probability_to_exactly_half() {
    let candidates = vec![
        candidate("1", 0.9, 0, 0.8, 1),
        candidate("2", 0.8, 0, 0.9, 1),
    ];
    let result = predict(&candidates);
    assert_eq!(result.predicted_pass_probability, Some(0.5));
    // No discussion also means no gap, whatever the raw mismatch.
    assert_eq!(result.legislative_gap.unwrap().score, 0.0);
}

#[test]
fn all_neutral_stances_zero_the_gap() {
    let candidates = vec![
        candidate("1", 0.9, 500, 0.04, 1),
        candidate("2", 0.8, 700, -0.05, 1),
        candidate("3", 0.7, 300, 0.0, 1),
    ];
    let gap = predict(&candidates).legislative_gap.unwrap();
    assert_eq!(gap.score, 0.0);
    assert_eq!(gap.level, GapLevel::Minimal);
}

// ── Concrete scenarios ────────────────────────────────────────────────────

#[test]
fn scenario_single_strong_cooperative_pass() {
    // One candidate: similarity 0.9, 100 speeches, score 0.5, passed.
    let result = predict(&[candidate("2101823", 0.9, 100, 0.5, 1)]);

    let record = &result.evidence_bills[0];
    let expected_weight = 0.9 * 101f64.ln() * (1.0 + 1.5 * 0.5);
    assert!((record.weight - expected_weight).abs() < 1e-9);
    assert!((record.weight - 7.27).abs() < 5e-3);
    assert_eq!(record.stance, Stance::Cooperative);

    let sc = 101f64.ln() / 1001f64.ln();
    let disc = sc * 0.75 + (1.0 - sc) * 0.5;
    let expected = (1.0 - sc) * 0.5 + sc * (0.6 * 1.0 + 0.4 * disc);
    let p = result.predicted_pass_probability.unwrap();
    assert!((p - 0.745).abs() < 1e-3);
    assert!((p - (expected * 1e4).round() / 1e4).abs() < 1e-12);

    // Debate was cooperative and the bill passed: modest gap, bucket low.
    let gap = result.legislative_gap.unwrap();
    let expected_gap = (0.75f64 - 1.0).abs() * sc;
    assert!((gap.score - (expected_gap * 1e4).round() / 1e4).abs() < 1e-12);
    assert_eq!(gap.level, GapLevel::Low);

    // 0.4·0.1 + 0.4·0.9 + 0.2·1 = 0.6 → medium.
    let confidence = result.confidence.unwrap();
    assert_eq!(confidence.score, 0.6);
    assert_eq!(confidence.level, ConfidenceLevel::Medium);
}

#[test]
fn scenario_opposed_sentiment_cancels_direction() {
    // Equal and opposite tone mass on two passed bills: the raw gap is
    // nonzero but the direction is ambiguous, so the gap score is zero.
    let result = predict(&[
        candidate("1", 0.8, 200, 0.7, 1),
        candidate("2", 0.8, 200, -0.7, 1),
    ]);
    assert_eq!(result.legislative_gap.unwrap().score, 0.0);
}

// ── Evidence handling ─────────────────────────────────────────────────────

#[test]
fn duplicate_bill_numbers_count_as_independent_evidence() {
    let row = candidate("2101823", 0.9, 100, 0.5, 1);
    let once = predict(&[row.clone()]);
    let twice = predict(&[row.clone(), row]);
    assert_eq!(twice.evidence_bills.len(), 2);
    // Doubling the evidence changes the aggregate (more total speeches).
    assert_ne!(
        once.predicted_pass_probability,
        twice.predicted_pass_probability
    );
}

#[test]
fn malformed_candidate_degrades_instead_of_failing() {
    let mut bad = candidate("1", 0.9, 100, 0.5, 1);
    bad.avg_score_prob = f64::NAN;
    let good = candidate("2", 0.8, 50, 0.3, 1);

    let result = predict(&[bad, good]);
    let record = &result.evidence_bills[0];
    assert_eq!(record.avg_score_prob, 0.0);
    assert_eq!(record.stance, Stance::Neutral);
    let p = result.predicted_pass_probability.unwrap();
    assert!(p.is_finite());
    assert!((0.01..=0.99).contains(&p));
}

#[test]
fn explanation_reflects_the_computed_signals() {
    let result = predict(&[
        candidate("1", 0.9, 120, 0.5, 1),
        candidate("2", 0.8, 80, 0.4, 1),
    ]);
    assert!(result.explanation.contains("'test query'"));
    assert!(result.explanation.contains("2 similar historical bills"));
    assert!(result.explanation.contains("200 recorded speeches"));
    assert!(result.explanation.contains("'cooperative-leaning'"));
}

// ── Wire contract ─────────────────────────────────────────────────────────

#[test]
fn serialized_result_matches_the_wire_contract() {
    let result = predict(&[candidate("2101823", 0.9, 100, 0.5, 1)]);
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["query"].is_string());
    assert!(json["predicted_pass_probability"].is_number());
    assert!(json["legislative_gap"]["score"].is_number());
    assert_eq!(json["legislative_gap"]["level"], "low");
    assert!(json["confidence"]["score"].is_number());
    assert_eq!(json["confidence"]["level"], "medium");
    assert!(json["explanation"].is_string());

    let bill = &json["evidence_bills"][0];
    assert_eq!(bill["bill_number"], "2101823");
    assert!(bill["bill_name"].is_string());
    assert!(bill["avg_score_prob"].is_number());
    assert_eq!(bill["n_speeches"], 100);
    assert_eq!(bill["label"], 1);
    assert!(bill["similarity"].is_number());
    assert_eq!(bill["stance"], "cooperative");
    // The trust weight is engine-internal and stays off the wire.
    assert!(bill.get("weight").is_none());
}

// ── Full pipeline with real collaborators ─────────────────────────────────

#[test]
fn end_to_end_pipeline_over_hashed_embeddings() {
    let provider = HashedProvider::new(64);
    let names = [
        "Framework Act on Artificial Intelligence",
        "Artificial Intelligence Industry Promotion Act",
        "Fisheries Cooperative Amendment",
    ];
    let bills: Vec<BillSnapshot> = names
        .iter()
        .enumerate()
        .map(|(i, name)| BillSnapshot {
            bill_number: format!("210000{i}"),
            bill_name: name.to_string(),
            avg_score_prob: 0.3,
            n_speeches: 40,
            label: 1,
            embedding: provider.embed(name).unwrap(),
        })
        .collect();
    let dataset = InMemoryDataset::new(bills);

    let config = LegisConfig::default();
    let engine = PredictionEngine::new(&provider, &dataset, &config);
    let result = engine
        .predict("Framework Act on Artificial Intelligence")
        .unwrap();

    // The verbatim title match must be admitted with similarity ~1.0 and
    // ranked first.
    let top = &result.evidence_bills[0];
    assert_eq!(top.bill_number, "2100000");
    assert!(top.similarity > 0.99);
    assert!(result.predicted_pass_probability.is_some());
    assert!(!dataset.is_empty());
}
