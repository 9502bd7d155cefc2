// visaguard-core/src/application/pipeline.rs
//
// Full training-data preparation run: ingestion, then validation. Each run
// writes its artifacts under a fresh timestamped directory for audit; the
// validation artifact is the gate the (out-of-scope) training stage consumes.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::ingestion::DataIngestion;
use crate::application::validation::DataValidation;
use crate::domain::drift::StatisticalDriftAnalyzer;
use crate::error::VisaguardError;
use crate::infrastructure::config::{PipelineConfig, load_schema};
use crate::infrastructure::fs::atomic_write_json;
use crate::infrastructure::readers::CsvDatasetReader;
use crate::ports::store::RecordStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub validation_status: bool,
    pub message: String,
    pub artifact_dir: PathBuf,
}

pub async fn run_training_pipeline<S: RecordStore>(
    workspace_dir: &Path,
    config: &PipelineConfig,
    store: S,
) -> Result<RunResult, VisaguardError> {
    println!("🚀 Starting training-data preparation pipeline...");

    // 1. SETUP (one timestamped run directory)
    let run_dir = config.run_dir(workspace_dir, Utc::now());
    fs::create_dir_all(&run_dir)?;
    info!(run_dir = %run_dir.display(), "run directory created");

    // 2. SCHEMA (validated once, typed from here on)
    let schema = load_schema(&workspace_dir.join(&config.schema_path))?;

    // 3. STAGE: DATA INGESTION
    println!("📦 Ingesting '{}' from the record store...", config.collection_name);
    let ingestion = DataIngestion::new(store, config.ingestion_config(&run_dir));
    let ingestion_artifact = ingestion.initiate_data_ingestion().await?;
    atomic_write_json(
        &run_dir.join("data_ingestion").join("artifact.json"),
        &ingestion_artifact,
    )?;

    // 4. STAGE: DATA VALIDATION
    println!("🧪 Validating schema conformance and dataset drift...");
    let validation = DataValidation::new(
        CsvDatasetReader,
        StatisticalDriftAnalyzer::new(config.drift.clone()),
        schema,
        config.validation_config(&run_dir),
    );
    let validation_artifact = validation.initiate_data_validation(&ingestion_artifact)?;
    atomic_write_json(
        &run_dir.join("data_validation").join("artifact.json"),
        &validation_artifact,
    )?;

    if validation_artifact.validation_status {
        println!("✅ Validation passed: {}", validation_artifact.message.trim());
    } else {
        println!("❌ Validation failed:\n{}", validation_artifact.message.trim_end());
    }

    Ok(RunResult {
        validation_status: validation_artifact.validation_status,
        message: validation_artifact.message,
        artifact_dir: run_dir,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::store::JsonLinesStore;
    use std::fmt::Write as _;
    use tempfile::tempdir;

    const SCHEMA: &str = "\
columns:
  - no_of_employees: int
  - prevailing_wage: float
  - continent: category
numerical_columns:
  - no_of_employees
  - prevailing_wage
categorical_columns:
  - continent
";

    fn write_workspace(root: &Path, rows: usize) {
        fs::create_dir_all(root.join("config")).unwrap();
        fs::create_dir_all(root.join("data")).unwrap();
        fs::write(root.join("config").join("schema.yaml"), SCHEMA).unwrap();

        let mut lines = String::new();
        for i in 0..rows {
            writeln!(
                lines,
                "{{\"_id\":\"{i}\",\"no_of_employees\":{},\"prevailing_wage\":{},\"continent\":\"{}\"}}",
                100 + i,
                65000 + i * 10,
                if i % 2 == 0 { "Asia" } else { "Europe" },
            )
            .unwrap();
        }
        fs::write(root.join("data").join("visa_data.jsonl"), lines).unwrap();
    }

    #[tokio::test]
    async fn test_full_run_produces_artifacts_and_report() {
        let ws = tempdir().unwrap();
        write_workspace(ws.path(), 50);
        let config = PipelineConfig::default();
        let store = JsonLinesStore::new(ws.path().join("data"));

        let result = run_training_pipeline(ws.path(), &config, store)
            .await
            .unwrap();

        assert!(result.validation_status);
        assert!(result.message.contains("drift"));
        assert!(result.artifact_dir.join("data_ingestion/artifact.json").exists());
        assert!(result.artifact_dir.join("data_validation/artifact.json").exists());
        assert!(
            result
                .artifact_dir
                .join("data_validation/drift_report/report.yaml")
                .exists()
        );
    }

    #[tokio::test]
    async fn test_failed_validation_still_persists_gate_artifact() {
        let ws = tempdir().unwrap();
        fs::create_dir_all(ws.path().join("config")).unwrap();
        fs::create_dir_all(ws.path().join("data")).unwrap();
        fs::write(ws.path().join("config").join("schema.yaml"), SCHEMA).unwrap();

        // Records lack the schema's categorical column entirely
        let mut lines = String::new();
        for i in 0..20 {
            writeln!(
                lines,
                "{{\"_id\":\"{i}\",\"no_of_employees\":{},\"prevailing_wage\":{}}}",
                100 + i,
                65000 + i * 10,
            )
            .unwrap();
        }
        fs::write(ws.path().join("data").join("visa_data.jsonl"), lines).unwrap();
        let config = PipelineConfig::default();
        let store = JsonLinesStore::new(ws.path().join("data"));

        let result = run_training_pipeline(ws.path(), &config, store)
            .await
            .unwrap();

        // A closed gate is a successful run: the artifact records the verdict.
        assert!(!result.validation_status);
        assert!(
            result
                .message
                .contains("Numerical or Categorical columns are missing in the train file")
        );
        assert!(result.artifact_dir.join("data_ingestion/artifact.json").exists());
        assert!(result.artifact_dir.join("data_validation/artifact.json").exists());
        assert!(
            !result
                .artifact_dir
                .join("data_validation/drift_report/report.yaml")
                .exists()
        );
    }

    #[tokio::test]
    async fn test_run_fails_cleanly_without_schema() {
        let ws = tempdir().unwrap();
        fs::create_dir_all(ws.path().join("data")).unwrap();
        fs::write(ws.path().join("data/visa_data.jsonl"), "{\"a\":1}\n").unwrap();
        let config = PipelineConfig::default();
        let store = JsonLinesStore::new(ws.path().join("data"));

        let result = run_training_pipeline(ws.path(), &config, store).await;
        assert!(result.is_err());
    }
}
