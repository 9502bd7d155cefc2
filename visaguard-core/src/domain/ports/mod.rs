// src/domain/ports/mod.rs

pub mod drift;
pub mod reader;

pub use drift::DriftAnalyzer;
pub use reader::DatasetReader;
