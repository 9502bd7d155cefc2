// visaguard-core/src/application/validation.rs
//
// The data validation stage: schema-conformance checks on the ingested
// train/test files, then dataset-drift detection when the schema checks pass.
// The returned artifact gates the downstream training stage.

use tracing::info;

use crate::domain::artifact::{DataIngestionArtifact, DataValidationArtifact};
use crate::domain::dataset::TabularDataset;
use crate::domain::ports::{DatasetReader, DriftAnalyzer};
use crate::domain::schema::SchemaDescriptor;
use crate::error::VisaguardError;
use crate::infrastructure::config::DataValidationConfig;
use crate::infrastructure::fs::atomic_write_yaml;

const COUNT_MISMATCH_TRAIN: &str =
    "Number of columns in the train file is not matching with schema\n";
const COUNT_MISMATCH_TEST: &str =
    "Number of columns in the test file is not matching with schema\n";
const COLUMNS_MISSING_TRAIN: &str =
    "Numerical or Categorical columns are missing in the train file\n";
const COLUMNS_MISSING_TEST: &str =
    "Numerical or Categorical columns are missing in the test file\n";
const DRIFT_DETECTED: &str = "Drift detected in the dataset\n";
const NO_DRIFT_DETECTED: &str = "No drift detected in the dataset\n";

/// Result of the column-existence check against one dataset.
#[derive(Debug, Default, PartialEq, Eq)]
struct ColumnExistence {
    missing_numerical: Vec<String>,
    missing_categorical: Vec<String>,
}

impl ColumnExistence {
    fn passed(&self) -> bool {
        self.missing_numerical.is_empty() && self.missing_categorical.is_empty()
    }
}

/// Validation orchestrator. Holds the loaded schema for the run plus the two
/// seams it validates through: the dataset reader and the drift analyzer.
pub struct DataValidation<R: DatasetReader, A: DriftAnalyzer> {
    reader: R,
    analyzer: A,
    schema: SchemaDescriptor,
    config: DataValidationConfig,
}

impl<R: DatasetReader, A: DriftAnalyzer> DataValidation<R, A> {
    pub fn new(
        reader: R,
        analyzer: A,
        schema: SchemaDescriptor,
        config: DataValidationConfig,
    ) -> Self {
        Self {
            reader,
            analyzer,
            schema,
            config,
        }
    }

    /// Runs the full validation sequence over the ingestion stage's output.
    ///
    /// Every schema check is evaluated even when an earlier one failed, so
    /// the artifact's message lists ALL problems in check order. Drift only
    /// runs when all four checks passed; its verdict never flips
    /// `validation_status` — drift is advisory in this stage's contract.
    ///
    /// Read failures abort the run with no partial artifact; failures inside
    /// drift detection are wrapped at this single boundary.
    pub fn initiate_data_validation(
        &self,
        ingestion: &DataIngestionArtifact,
    ) -> Result<DataValidationArtifact, VisaguardError> {
        info!("Data validation started");

        let train = self.reader.read(&ingestion.trained_file_path)?;
        let test = self.reader.read(&ingestion.test_file_path)?;

        let mut message = String::new();

        let status = self.validate_column_count(&train);
        info!(dataset = "train", status, "column count check");
        if !status {
            message.push_str(COUNT_MISMATCH_TRAIN);
        }

        let status = self.validate_column_count(&test);
        info!(dataset = "test", status, "column count check");
        if !status {
            message.push_str(COUNT_MISMATCH_TEST);
        }

        let existence = self.check_column_existence(&train);
        self.log_missing("train", &existence);
        if !existence.passed() {
            message.push_str(COLUMNS_MISSING_TRAIN);
        }

        let existence = self.check_column_existence(&test);
        self.log_missing("test", &existence);
        if !existence.passed() {
            message.push_str(COLUMNS_MISSING_TEST);
        }

        let validation_status = message.is_empty();

        if validation_status {
            let drifted = self
                .detect_dataset_drift(&train, &test)
                .map_err(VisaguardError::in_validation_stage("drift detection"))?;

            // Overwrite, not append: the message is empty here by
            // construction since every schema check passed.
            message = if drifted {
                info!("Drift detected in the dataset");
                DRIFT_DETECTED.to_string()
            } else {
                info!("No drift detected in the dataset");
                NO_DRIFT_DETECTED.to_string()
            };
        } else {
            info!(%message, "Data validation failed due to schema mismatch or missing columns");
        }

        let artifact = DataValidationArtifact {
            validation_status,
            message,
            drift_report_file_path: self.config.drift_report_file_path.clone(),
        };

        info!(?artifact, "Data validation artifact");
        Ok(artifact)
    }

    /// Pass iff the dataset carries exactly the column count the schema expects.
    fn validate_column_count(&self, dataset: &TabularDataset) -> bool {
        dataset.column_count() == self.schema.expected_column_count()
    }

    /// Collects ALL missing numerical and categorical names; no short-circuit.
    fn check_column_existence(&self, dataset: &TabularDataset) -> ColumnExistence {
        let present = dataset.column_names();

        ColumnExistence {
            missing_numerical: self
                .schema
                .numerical_columns()
                .iter()
                .filter(|name| !present.contains(name.as_str()))
                .cloned()
                .collect(),
            missing_categorical: self
                .schema
                .categorical_columns()
                .iter()
                .filter(|name| !present.contains(name.as_str()))
                .cloned()
                .collect(),
        }
    }

    fn log_missing(&self, dataset: &str, existence: &ColumnExistence) {
        if !existence.missing_numerical.is_empty() {
            info!(dataset, missing = ?existence.missing_numerical, "Missing numerical columns");
        }
        if !existence.missing_categorical.is_empty() {
            info!(dataset, missing = ?existence.missing_categorical, "Missing categorical columns");
        }
    }

    /// Invokes the drift analyzer and serializes its raw report to the
    /// configured path (overwriting any previous report), then returns the
    /// dataset-level flag.
    fn detect_dataset_drift(
        &self,
        reference: &TabularDataset,
        current: &TabularDataset,
    ) -> Result<bool, VisaguardError> {
        let report = self.analyzer.analyze(&self.schema, reference, current)?;

        let report_path = &self.config.drift_report_file_path;
        atomic_write_yaml(report_path, &report).map_err(VisaguardError::Infrastructure)?;

        info!(
            "{}/{} drift detected.",
            report.n_drifted_features, report.n_features
        );
        Ok(report.dataset_drift)
    }
}
