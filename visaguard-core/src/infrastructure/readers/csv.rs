// visaguard-core/src/infrastructure/readers/csv.rs

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::domain::dataset::{Column, TabularDataset};
use crate::domain::error::DomainError;
use crate::domain::ports::DatasetReader;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// `DatasetReader` adapter over comma-delimited files with a header row.
pub struct CsvDatasetReader;

impl CsvDatasetReader {
    fn read_inner(path: &Path) -> Result<TabularDataset, InfrastructureError> {
        let file = File::open(path).map_err(InfrastructureError::Io)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(file);

        let headers = reader.headers().map_err(InfrastructureError::Csv)?.clone();
        if headers.is_empty() {
            return Err(InfrastructureError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "empty file: expected a header row",
            )));
        }

        let mut columns: Vec<Column> = headers
            .iter()
            .map(|name| Column::new(name, Vec::new()))
            .collect();

        for record in reader.records() {
            let record = record.map_err(InfrastructureError::Csv)?;
            for (idx, cell) in record.iter().enumerate() {
                let value = if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                };
                // `flexible(false)` guarantees record width == header width
                if let Some(column) = columns.get_mut(idx) {
                    column.values.push(value);
                }
            }
        }

        Ok(TabularDataset::new(columns))
    }
}

impl DatasetReader for CsvDatasetReader {
    fn read(&self, path: &Path) -> Result<TabularDataset, DomainError> {
        let dataset = Self::read_inner(path).map_err(|e| DomainError::DatasetRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(
            path = %path.display(),
            columns = dataset.column_count(),
            rows = dataset.row_count(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

/// Serializes a table back to CSV (header row first), atomically.
/// Used by ingestion for the feature store and the train/test files.
pub fn write_dataset_csv(
    path: &Path,
    dataset: &TabularDataset,
) -> Result<(), InfrastructureError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(dataset.columns().iter().map(|c| c.name.as_str()))?;

    for row in 0..dataset.row_count() {
        let record: Vec<&str> = dataset
            .columns()
            .iter()
            .map(|col| col.values.get(row).and_then(|v| v.as_deref()).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;
    atomic_write(path, bytes)
}
