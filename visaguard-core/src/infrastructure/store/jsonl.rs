// visaguard-core/src/infrastructure/store/jsonl.rs

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::domain::dataset::{Column, TabularDataset};
use crate::error::VisaguardError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::store::RecordStore;

/// Internal bookkeeping field of the upstream document store; never a feature.
const DOCUMENT_ID_FIELD: &str = "_id";

/// `RecordStore` adapter over newline-delimited JSON files
/// (`<data_dir>/<collection>.jsonl`, one flat object per line).
///
/// Local/dev stand-in for the production document database. Column order is
/// first-seen field order across the documents; the `_id` field is dropped.
pub struct JsonLinesStore {
    data_dir: PathBuf,
}

impl JsonLinesStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn cell(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn load(&self, collection: &str) -> Result<TabularDataset, InfrastructureError> {
        let path = self.data_dir.join(format!("{}.jsonl", collection));
        let content = fs::read_to_string(&path).map_err(InfrastructureError::Io)?;

        let mut documents: Vec<serde_json::Map<String, Value>> = Vec::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            let value: Value = serde_json::from_str(line).map_err(InfrastructureError::Json)?;
            match value {
                Value::Object(map) => documents.push(map),
                _ => {
                    return Err(InfrastructureError::ConfigError(format!(
                        "collection '{}' contains a non-object document",
                        collection
                    )));
                }
            }
        }

        // Union of fields in first-seen order
        let mut field_order: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for doc in &documents {
            for key in doc.keys() {
                if key != DOCUMENT_ID_FIELD && seen.insert(key.clone()) {
                    field_order.push(key.clone());
                }
            }
        }

        let mut columns: Vec<Column> = field_order
            .iter()
            .map(|name| Column::new(name.clone(), Vec::with_capacity(documents.len())))
            .collect();

        for doc in &documents {
            for (name, column) in field_order.iter().zip(columns.iter_mut()) {
                column.values.push(doc.get(name).and_then(Self::cell));
            }
        }

        Ok(TabularDataset::new(columns))
    }
}

#[async_trait]
impl RecordStore for JsonLinesStore {
    async fn fetch_collection(
        &self,
        collection: &str,
    ) -> Result<TabularDataset, VisaguardError> {
        let dataset = self
            .load(collection)
            .map_err(VisaguardError::Infrastructure)?;
        info!(
            collection = %collection,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "collection fetched from store"
        );
        Ok(dataset)
    }
}
