//! SimilaritySearcher: score the snapshot, admit through the tiered cutoff.

use tracing::{debug, info};

use legis_core::config::SearchConfig;
use legis_core::errors::LegisResult;
use legis_core::models::CandidatePrecedent;
use legis_core::traits::IHistoricalDataset;

use crate::cutoff::TieredCutoff;
use crate::similarity;

/// Scores every snapshot row against the query embedding and returns the
/// admitted candidates sorted by similarity descending. Ties break on
/// `bill_number` so results are deterministic for identical inputs.
pub struct SimilaritySearcher {
    cutoff: TieredCutoff,
}

impl SimilaritySearcher {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            cutoff: TieredCutoff::new(
                config.strict_threshold,
                config.soft_threshold,
                config.min_evidence,
            ),
        }
    }

    /// Run the search. An empty dataset yields an empty candidate list,
    /// which is the engine's valid no-evidence input, not an error.
    pub fn search(
        &self,
        query_embedding: &[f32],
        dataset: &dyn IHistoricalDataset,
    ) -> LegisResult<Vec<CandidatePrecedent>> {
        let bills = dataset.bills();
        if bills.is_empty() {
            debug!("dataset snapshot is empty");
            return Ok(Vec::new());
        }

        let mut similarities = Vec::with_capacity(bills.len());
        for bill in bills {
            similarities.push(similarity::cosine(query_embedding, &bill.embedding)?);
        }

        let (admitted, tier) = self.cutoff.select(&similarities);

        let mut candidates: Vec<CandidatePrecedent> = admitted
            .into_iter()
            .map(|i| {
                let bill = &bills[i];
                CandidatePrecedent {
                    bill_number: bill.bill_number.clone(),
                    bill_name: bill.bill_name.clone(),
                    avg_score_prob: bill.avg_score_prob,
                    n_speeches: bill.n_speeches,
                    label: bill.label,
                    similarity: similarities[i],
                }
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.bill_number.cmp(&b.bill_number))
        });

        info!(
            scanned = bills.len(),
            admitted = candidates.len(),
            ?tier,
            "similarity search complete"
        );

        Ok(candidates)
    }
}
