// visaguard-core/src/application/mod.rs

pub mod clean;
pub mod ingestion;
pub mod pipeline;
pub mod validation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use visaguard_core::application::{run_training_pipeline, DataValidation};`
// without knowing the internal file layout.

pub use clean::clean_workspace;
pub use ingestion::DataIngestion;
pub use pipeline::{RunResult, run_training_pipeline};
pub use validation::DataValidation;
