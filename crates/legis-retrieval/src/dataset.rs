//! Owned in-memory snapshot of the historical corpus.

use legis_core::errors::{DatasetError, LegisResult};
use legis_core::models::BillSnapshot;
use legis_core::traits::IHistoricalDataset;

/// A fully materialized, immutable snapshot. The surrounding application
/// builds one per dataset release and shares it read-only across queries.
#[derive(Debug)]
pub struct InMemoryDataset {
    bills: Vec<BillSnapshot>,
}

impl InMemoryDataset {
    /// Wrap an already validated list of rows.
    pub fn new(bills: Vec<BillSnapshot>) -> Self {
        Self { bills }
    }

    /// Parse a snapshot from its JSON serialization (an array of rows),
    /// verifying that every row's embedding has the same dimension.
    pub fn from_json_str(json: &str) -> LegisResult<Self> {
        let bills: Vec<BillSnapshot> =
            serde_json::from_str(json).map_err(|e| DatasetError::LoadFailed {
                reason: e.to_string(),
            })?;

        if let Some(first) = bills.first() {
            let expected = first.embedding.len();
            for (row, bill) in bills.iter().enumerate() {
                if bill.embedding.len() != expected {
                    return Err(DatasetError::InconsistentEmbedding {
                        row,
                        expected,
                        actual: bill.embedding.len(),
                    }
                    .into());
                }
            }
        }

        Ok(Self { bills })
    }
}

impl IHistoricalDataset for InMemoryDataset {
    fn bills(&self) -> &[BillSnapshot] {
        &self.bills
    }
}
