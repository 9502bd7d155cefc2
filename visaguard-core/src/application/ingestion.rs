// visaguard-core/src/application/ingestion.rs
//
// The data ingestion stage: export the source collection to the feature
// store, then split it into reproducible train/test files for validation.

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::domain::artifact::DataIngestionArtifact;
use crate::domain::dataset::TabularDataset;
use crate::domain::error::DomainError;
use crate::error::VisaguardError;
use crate::infrastructure::config::DataIngestionConfig;
use crate::infrastructure::readers::write_dataset_csv;
use crate::ports::store::RecordStore;

pub struct DataIngestion<S: RecordStore> {
    store: S,
    config: DataIngestionConfig,
}

impl<S: RecordStore> DataIngestion<S> {
    pub fn new(store: S, config: DataIngestionConfig) -> Self {
        Self { store, config }
    }

    /// Runs the whole stage: export, then split.
    pub async fn initiate_data_ingestion(&self) -> Result<DataIngestionArtifact, VisaguardError> {
        info!("Data ingestion started");
        let dataset = self.export_to_feature_store().await?;
        self.split_as_train_test(&dataset)
    }

    /// Fetches the collection from the record store and persists the full
    /// table to the feature-store path.
    pub async fn export_to_feature_store(&self) -> Result<TabularDataset, VisaguardError> {
        info!(
            collection = %self.config.collection_name,
            "Exporting data from the record store to the feature store"
        );
        let dataset = self.store.fetch_collection(&self.config.collection_name).await?;

        write_csv(&self.config.feature_store_file_path, &dataset)?;
        info!(
            path = %self.config.feature_store_file_path.display(),
            rows = dataset.row_count(),
            "Feature store written"
        );
        Ok(dataset)
    }

    /// Shuffles rows with the configured seed and splits them by the test
    /// ratio. The shuffle order is preserved within each side so reruns with
    /// the same seed produce byte-identical files.
    pub fn split_as_train_test(
        &self,
        dataset: &TabularDataset,
    ) -> Result<DataIngestionArtifact, VisaguardError> {
        let rows = dataset.row_count();
        if rows == 0 {
            return Err(DomainError::EmptySplit.into());
        }

        let mut indices: Vec<usize> = (0..rows).collect();
        let mut rng = StdRng::seed_from_u64(self.config.random_seed);
        indices.shuffle(&mut rng);

        let test_len = ((rows as f64) * self.config.train_test_split_ratio).round() as usize;
        let test_len = test_len.min(rows);
        let (test_indices, train_indices) = indices.split_at(test_len);

        let train = dataset.select_rows(train_indices);
        let test = dataset.select_rows(test_indices);
        info!(
            train_rows = train.row_count(),
            test_rows = test.row_count(),
            "Performed train test split on the dataset"
        );

        write_csv(&self.config.trained_file_path, &train)?;
        write_csv(&self.config.test_file_path, &test)?;

        Ok(DataIngestionArtifact {
            feature_store_file_path: self.config.feature_store_file_path.clone(),
            trained_file_path: self.config.trained_file_path.clone(),
            test_file_path: self.config.test_file_path.clone(),
        })
    }
}

fn write_csv(path: &Path, dataset: &TabularDataset) -> Result<(), VisaguardError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_dataset_csv(path, dataset).map_err(VisaguardError::Infrastructure)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::dataset::Column;
    use async_trait::async_trait;
    use tempfile::tempdir;

    struct FixedStore {
        dataset: TabularDataset,
    }

    #[async_trait]
    impl RecordStore for FixedStore {
        async fn fetch_collection(
            &self,
            _collection: &str,
        ) -> Result<TabularDataset, VisaguardError> {
            Ok(self.dataset.clone())
        }
    }

    fn ids(n: usize) -> TabularDataset {
        TabularDataset::new(vec![Column::new(
            "id",
            (0..n).map(|i| Some(i.to_string())).collect(),
        )])
    }

    fn config(dir: &Path) -> DataIngestionConfig {
        DataIngestionConfig {
            collection_name: "visa_data".into(),
            feature_store_file_path: dir.join("feature_store").join("visa.csv"),
            trained_file_path: dir.join("ingested").join("train.csv"),
            test_file_path: dir.join("ingested").join("test.csv"),
            train_test_split_ratio: 0.2,
            random_seed: 42,
        }
    }

    #[tokio::test]
    async fn test_initiate_writes_all_three_files() {
        let dir = tempdir().unwrap();
        let ingestion = DataIngestion::new(FixedStore { dataset: ids(10) }, config(dir.path()));

        let artifact = ingestion.initiate_data_ingestion().await.unwrap();

        assert!(artifact.feature_store_file_path.exists());
        assert!(artifact.trained_file_path.exists());
        assert!(artifact.test_file_path.exists());
    }

    #[test]
    fn test_split_respects_ratio_and_partitions_rows() {
        let dir = tempdir().unwrap();
        let ingestion = DataIngestion::new(FixedStore { dataset: ids(0) }, config(dir.path()));

        let dataset = ids(10);
        ingestion.split_as_train_test(&dataset).unwrap();

        let read = |name: &str| {
            let content =
                std::fs::read_to_string(dir.path().join("ingested").join(name)).unwrap();
            content.lines().skip(1).map(str::to_string).collect::<Vec<_>>()
        };

        let train = read("train.csv");
        let test = read("test.csv");
        assert_eq!(test.len(), 2);
        assert_eq!(train.len(), 8);

        // Each source row lands on exactly one side
        let mut all: Vec<String> = train.into_iter().chain(test).collect();
        all.sort_by_key(|v| v.parse::<usize>().unwrap());
        let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_split_is_deterministic_for_fixed_seed() {
        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();
        let dataset = ids(25);

        DataIngestion::new(FixedStore { dataset: ids(0) }, config(dir_a.path()))
            .split_as_train_test(&dataset)
            .unwrap();
        DataIngestion::new(FixedStore { dataset: ids(0) }, config(dir_b.path()))
            .split_as_train_test(&dataset)
            .unwrap();

        let content = |dir: &Path| {
            std::fs::read_to_string(dir.join("ingested").join("train.csv")).unwrap()
        };
        assert_eq!(content(dir_a.path()), content(dir_b.path()));
    }

    #[test]
    fn test_empty_dataset_cannot_be_split() {
        let dir = tempdir().unwrap();
        let ingestion = DataIngestion::new(FixedStore { dataset: ids(0) }, config(dir.path()));

        let result = ingestion.split_as_train_test(&TabularDataset::default());
        assert!(matches!(
            result,
            Err(VisaguardError::Domain(DomainError::EmptySplit))
        ));
    }
}
