pub mod pipeline;
pub mod schema;

pub use pipeline::{
    DataIngestionConfig, DataValidationConfig, PipelineConfig, load_pipeline_config,
};
pub use schema::load_schema;
