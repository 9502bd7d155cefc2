// visaguard-core/src/domain/drift/mod.rs

pub mod analyzer;
pub mod report;
pub mod statistics;

// Re-exports
pub use analyzer::{DriftSettings, StatisticalDriftAnalyzer};
pub use report::{DriftReport, FeatureDrift, FeatureKind};
