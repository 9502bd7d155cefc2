// visaguard-core/src/domain/artifact.rs
//
// Immutable records handed from one pipeline stage to the next.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output of the ingestion stage: where the exported data landed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataIngestionArtifact {
    pub feature_store_file_path: PathBuf,
    pub trained_file_path: PathBuf,
    pub test_file_path: PathBuf,
}

/// Output of the validation stage, consumed as a gate by downstream training.
///
/// `message` is non-empty iff validation failed OR drift was evaluated (the
/// drift sub-check always leaves a sentence, even on the no-drift outcome).
/// `drift_report_file_path` is always recorded, though the file itself only
/// exists when schema validation passed and drift actually ran.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataValidationArtifact {
    pub validation_status: bool,
    pub message: String,
    pub drift_report_file_path: PathBuf,
}
