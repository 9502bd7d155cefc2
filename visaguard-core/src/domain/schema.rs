// visaguard-core/src/domain/schema.rs

use std::collections::BTreeSet;

use crate::domain::error::DomainError;

/// Expected table shape for the ingested visa data, loaded once per run from
/// the declarative schema file and read-only thereafter.
///
/// The column count covers every column the table carries (target included);
/// the numerical/categorical sets only cover the feature columns the drift
/// analyzer inspects, so their union is allowed to be smaller than the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    expected_column_count: usize,
    numerical_columns: BTreeSet<String>,
    categorical_columns: BTreeSet<String>,
}

impl SchemaDescriptor {
    /// Builds a descriptor, rejecting names declared both numerical and
    /// categorical. A feature cannot be drift-checked under two kinds at once.
    pub fn new(
        expected_column_count: usize,
        numerical_columns: BTreeSet<String>,
        categorical_columns: BTreeSet<String>,
    ) -> Result<Self, DomainError> {
        let overlap: Vec<&String> = numerical_columns
            .intersection(&categorical_columns)
            .collect();
        if !overlap.is_empty() {
            return Err(DomainError::SchemaLoad {
                path: "<schema>".into(),
                reason: format!(
                    "columns declared both numerical and categorical: {:?}",
                    overlap
                ),
            });
        }

        Ok(Self {
            expected_column_count,
            numerical_columns,
            categorical_columns,
        })
    }

    pub fn expected_column_count(&self) -> usize {
        self.expected_column_count
    }

    pub fn numerical_columns(&self) -> &BTreeSet<String> {
        &self.numerical_columns
    }

    pub fn categorical_columns(&self) -> &BTreeSet<String> {
        &self.categorical_columns
    }
}
