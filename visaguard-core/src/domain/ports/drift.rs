use crate::domain::dataset::TabularDataset;
use crate::domain::drift::report::DriftReport;
use crate::domain::error::DomainError;
use crate::domain::schema::SchemaDescriptor;

/// Computes per-feature distributional drift indicators between a reference
/// dataset (train) and a current dataset (test), plus the dataset-level flag.
/// The validation orchestrator treats this as an external capability: it only
/// consumes the typed report, never the underlying statistics.
pub trait DriftAnalyzer: Send + Sync {
    fn analyze(
        &self,
        schema: &SchemaDescriptor,
        reference: &TabularDataset,
        current: &TabularDataset,
    ) -> Result<DriftReport, DomainError>;
}
