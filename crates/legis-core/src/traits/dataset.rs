use crate::models::BillSnapshot;

/// Read-only tabular snapshot of the historical bill corpus.
///
/// The engine never mutates the dataset; lifecycle management (building,
/// refreshing, storing the snapshot) belongs to the surrounding application.
pub trait IHistoricalDataset: Send + Sync {
    /// All rows of the snapshot.
    fn bills(&self) -> &[BillSnapshot];

    fn len(&self) -> usize {
        self.bills().len()
    }

    fn is_empty(&self) -> bool {
        self.bills().is_empty()
    }
}
