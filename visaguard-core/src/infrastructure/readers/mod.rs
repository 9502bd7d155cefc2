pub mod csv;

pub use csv::{CsvDatasetReader, write_dataset_csv};
