use crate::domain::dataset::TabularDataset;
use crate::domain::error::DomainError;
use std::path::Path;

/// Loads a delimited file with a header row into an in-memory table.
/// Pure read, no side effects; failures surface as `DatasetRead`.
pub trait DatasetReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<TabularDataset, DomainError>;
}
