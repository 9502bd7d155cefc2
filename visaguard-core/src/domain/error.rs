// visaguard-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Schema load failed for '{path}': {reason}")]
    #[diagnostic(
        code(visaguard::domain::schema_load),
        help("Check that the schema file exists and declares 'columns', 'numerical_columns' and 'categorical_columns'.")
    )]
    SchemaLoad { path: String, reason: String },

    #[error("Dataset read failed for '{path}': {reason}")]
    #[diagnostic(
        code(visaguard::domain::dataset_read),
        help("Check that the file exists and is a delimited table with a header row.")
    )]
    DatasetRead { path: String, reason: String },

    #[error("Drift analysis failed: {0}")]
    #[diagnostic(code(visaguard::domain::drift))]
    DriftAnalysis(String),

    #[error("Cannot split an empty dataset into train/test")]
    #[diagnostic(code(visaguard::domain::empty_split))]
    EmptySplit,
}
