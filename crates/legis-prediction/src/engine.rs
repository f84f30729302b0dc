//! PredictionEngine: embed → search → pure rule-based computation.

use tracing::{debug, info};

use legis_core::config::{LegisConfig, PredictionConfig};
use legis_core::errors::LegisResult;
use legis_core::models::{round_to, CandidatePrecedent, PredictionResult};
use legis_core::traits::{IEmbeddingProvider, IHistoricalDataset};
use legis_retrieval::SimilaritySearcher;

use crate::{aggregate, blend, confidence, explain, gap, weighting};

/// Orchestrates one prediction query end to end.
///
/// The two preceding collaborator calls (embedding, similarity search) are
/// the only operations that can fail over a network boundary; their errors
/// propagate as-is and are never degraded into a no-evidence result. Once
/// candidates are in hand, [`predict_from_candidates`] is pure, synchronous
/// and total — independent queries can run concurrently with no shared
/// state.
///
/// [`predict_from_candidates`]: PredictionEngine::predict_from_candidates
pub struct PredictionEngine<'a> {
    embeddings: &'a dyn IEmbeddingProvider,
    dataset: &'a dyn IHistoricalDataset,
    searcher: SimilaritySearcher,
    config: PredictionConfig,
}

impl<'a> PredictionEngine<'a> {
    pub fn new(
        embeddings: &'a dyn IEmbeddingProvider,
        dataset: &'a dyn IHistoricalDataset,
        config: &LegisConfig,
    ) -> Self {
        Self {
            embeddings,
            dataset,
            searcher: SimilaritySearcher::new(&config.search),
            config: config.prediction.clone(),
        }
    }

    /// Full pipeline: embed the query, search the snapshot, compute.
    pub fn predict(&self, query: &str) -> LegisResult<PredictionResult> {
        let query_embedding = self.embeddings.embed(query)?;
        let candidates = self.searcher.search(&query_embedding, self.dataset)?;
        Ok(self.predict_from_candidates(query, &candidates))
    }

    /// The core computation over an already-fetched candidate list.
    ///
    /// An empty list short-circuits to the no-evidence result: all numeric
    /// fields absent, fixed explanation, empty evidence. That is a valid
    /// terminal state, not an error.
    pub fn predict_from_candidates(
        &self,
        query: &str,
        candidates: &[CandidatePrecedent],
    ) -> PredictionResult {
        if candidates.is_empty() {
            debug!(query, "no candidates, returning no-evidence result");
            return PredictionResult {
                query: query.to_string(),
                predicted_pass_probability: None,
                legislative_gap: None,
                confidence: None,
                explanation: explain::NO_EVIDENCE_EXPLANATION.to_string(),
                evidence_bills: Vec::new(),
            };
        }

        // Admission: sanitize and weight each candidate.
        let evidence = weighting::weigh_candidates(candidates, self.config.alpha);

        // Outcome and discussion aggregation are independent of each other.
        let outcomes = aggregate::aggregate_outcomes(&evidence);
        let discussion = aggregate::aggregate_discussion(&evidence, self.config.speech_saturation);

        let pass_prob = blend::blend(
            outcomes.data_pass_prob,
            discussion.discussion_based_prob,
            discussion.speech_confidence,
            &self.config,
        );

        let legislative_gap = gap::assess_gap(
            &evidence,
            discussion.coop_expectation,
            discussion.speech_confidence,
        );

        // Independent of the probability path by design.
        let confidence = confidence::assess_confidence(&evidence, outcomes.total_weight);

        let explanation = explain::compose(
            query,
            evidence.len(),
            discussion.total_speeches,
            discussion.mean_score,
            legislative_gap.level,
        );

        info!(
            evidence = evidence.len(),
            pass_prob,
            gap = legislative_gap.score,
            confidence = confidence.score,
            "prediction complete"
        );

        PredictionResult {
            query: query.to_string(),
            predicted_pass_probability: Some(round_to(pass_prob, 4)),
            legislative_gap: Some(legislative_gap),
            confidence: Some(confidence),
            explanation,
            evidence_bills: evidence,
        }
    }
}
