// visaguard-core/src/infrastructure/config/pipeline.rs

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::drift::DriftSettings;
use crate::infrastructure::error::InfrastructureError;

// Fixed stage layout under one timestamped run directory
const DATA_INGESTION_DIR_NAME: &str = "data_ingestion";
const FEATURE_STORE_DIR_NAME: &str = "feature_store";
const INGESTED_DIR_NAME: &str = "ingested";
const DATA_VALIDATION_DIR_NAME: &str = "data_validation";
const DRIFT_REPORT_DIR_NAME: &str = "drift_report";

/// Declarative pipeline settings, loaded from `visaguard.yaml` at the
/// workspace root. Every field has a default matching the historical layout,
/// so a minimal file only names what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_pipeline_name")]
    pub pipeline_name: String,

    /// Collection in the document store the raw records come from.
    #[serde(default = "default_collection_name")]
    pub collection_name: String,

    /// Directory the local record-store adapter reads collections from.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: String,

    #[serde(default = "default_schema_path")]
    pub schema_path: String,

    #[serde(default = "default_feature_store_file_name")]
    pub feature_store_file_name: String,

    #[serde(default = "default_train_file_name")]
    pub train_file_name: String,

    #[serde(default = "default_test_file_name")]
    pub test_file_name: String,

    #[serde(default = "default_drift_report_file_name")]
    pub drift_report_file_name: String,

    /// Fraction of rows held out as the test set.
    #[serde(default = "default_split_ratio")]
    pub train_test_split_ratio: f64,

    /// Seed for the split shuffle, fixed so reruns are reproducible.
    #[serde(default = "default_random_seed")]
    pub random_seed: u64,

    #[serde(default)]
    pub drift: DriftSettings,

    #[serde(default = "default_clean_targets")]
    pub clean_targets: Vec<String>,
}

fn default_pipeline_name() -> String {
    "visaguard".to_string()
}
fn default_collection_name() -> String {
    "visa_data".to_string()
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_artifact_dir() -> String {
    "artifact".to_string()
}
fn default_schema_path() -> String {
    "config/schema.yaml".to_string()
}
fn default_feature_store_file_name() -> String {
    "visa.csv".to_string()
}
fn default_train_file_name() -> String {
    "train.csv".to_string()
}
fn default_test_file_name() -> String {
    "test.csv".to_string()
}
fn default_drift_report_file_name() -> String {
    "report.yaml".to_string()
}
fn default_split_ratio() -> f64 {
    0.2
}
fn default_random_seed() -> u64 {
    42
}
fn default_clean_targets() -> Vec<String> {
    vec![default_artifact_dir()]
}

impl Default for PipelineConfig {
    // serde defaults and Default must agree; an empty mapping is the
    // canonical minimal config.
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        serde_yaml::from_str("{}").unwrap()
    }
}

impl PipelineConfig {
    /// One run directory per pipeline invocation: `<artifact>/<timestamp>`.
    pub fn run_dir(&self, workspace_dir: &Path, started_at: DateTime<Utc>) -> PathBuf {
        workspace_dir
            .join(&self.artifact_dir)
            .join(started_at.format("%m-%d-%Y-%H-%M-%S").to_string())
    }

    pub fn ingestion_config(&self, run_dir: &Path) -> DataIngestionConfig {
        let stage_dir = run_dir.join(DATA_INGESTION_DIR_NAME);
        DataIngestionConfig {
            collection_name: self.collection_name.clone(),
            feature_store_file_path: stage_dir
                .join(FEATURE_STORE_DIR_NAME)
                .join(&self.feature_store_file_name),
            trained_file_path: stage_dir.join(INGESTED_DIR_NAME).join(&self.train_file_name),
            test_file_path: stage_dir.join(INGESTED_DIR_NAME).join(&self.test_file_name),
            train_test_split_ratio: self.train_test_split_ratio,
            random_seed: self.random_seed,
        }
    }

    pub fn validation_config(&self, run_dir: &Path) -> DataValidationConfig {
        DataValidationConfig {
            drift_report_file_path: run_dir
                .join(DATA_VALIDATION_DIR_NAME)
                .join(DRIFT_REPORT_DIR_NAME)
                .join(&self.drift_report_file_name),
        }
    }
}

/// Derived per-run settings for the ingestion stage.
#[derive(Debug, Clone)]
pub struct DataIngestionConfig {
    pub collection_name: String,
    pub feature_store_file_path: PathBuf,
    pub trained_file_path: PathBuf,
    pub test_file_path: PathBuf,
    pub train_test_split_ratio: f64,
    pub random_seed: u64,
}

/// Derived per-run settings for the validation stage.
#[derive(Debug, Clone)]
pub struct DataValidationConfig {
    pub drift_report_file_path: PathBuf,
}

// --- LOADER ---

pub fn load_pipeline_config(workspace_dir: &Path) -> Result<PipelineConfig, InfrastructureError> {
    let config_path = find_main_config(workspace_dir)?;
    info!(path = ?config_path, "Loading pipeline configuration");

    let content = fs::read_to_string(&config_path).map_err(InfrastructureError::Io)?;
    let mut config: PipelineConfig =
        serde_yaml::from_str(&content).map_err(InfrastructureError::Yaml)?;

    apply_env_overrides(&mut config);

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["visaguard.yaml", "visaguard_pipeline.yaml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

fn apply_env_overrides(config: &mut PipelineConfig) {
    // Layering pattern: VISAGUARD_ARTIFACT_DIR=/tmp/build visaguard run
    if let Ok(val) = std::env::var("VISAGUARD_ARTIFACT_DIR") {
        info!(old = ?config.artifact_dir, new = ?val, "Overriding artifact dir via ENV");
        config.artifact_dir = val;
    }
    if let Ok(val) = std::env::var("VISAGUARD_SCHEMA_PATH") {
        info!(old = ?config.schema_path, new = ?val, "Overriding schema path via ENV");
        config.schema_path = val;
    }
}
