// visaguard-core/src/infrastructure/config/schema.rs

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::schema::SchemaDescriptor;
use crate::infrastructure::error::InfrastructureError;

// =============================================================================
//  1. DATA CONTRACT (wire shape of config/schema.yaml)
// =============================================================================

/// Raw schema document. `columns` entries are `name: type` mappings whose
/// declared types belong to the training stage; validation only uses the
/// list's length.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    columns: Vec<serde_yaml::Value>,
    numerical_columns: Vec<String>,
    categorical_columns: Vec<String>,
}

// =============================================================================
//  2. LOADER (validated once at the boundary into the typed descriptor)
// =============================================================================

pub fn load_schema(path: &Path) -> Result<SchemaDescriptor, DomainError> {
    let descriptor = load_inner(path).map_err(|e| DomainError::SchemaLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!(
        path = %path.display(),
        columns = descriptor.expected_column_count(),
        numerical = descriptor.numerical_columns().len(),
        categorical = descriptor.categorical_columns().len(),
        "schema loaded"
    );
    Ok(descriptor)
}

fn load_inner(path: &Path) -> Result<SchemaDescriptor, InfrastructureError> {
    let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
    let file: SchemaFile = serde_yaml::from_str(&content).map_err(InfrastructureError::Yaml)?;

    let numerical: BTreeSet<String> = file.numerical_columns.into_iter().collect();
    let categorical: BTreeSet<String> = file.categorical_columns.into_iter().collect();

    SchemaDescriptor::new(file.columns.len(), numerical, categorical)
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
}
