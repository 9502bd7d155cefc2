// visaguard-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(visaguard::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(visaguard::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    // --- JSON (documents, persisted artifacts) ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(code(visaguard::infra::json))]
    Json(#[from] serde_json::Error),

    // --- DELIMITED FILES ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(visaguard::infra::csv),
        help("Check the delimiter and that every row matches the header width.")
    )]
    Csv(#[from] csv::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Pipeline configuration not found at '{0}'")]
    #[diagnostic(code(visaguard::infra::config_missing))]
    ConfigNotFound(String),
}
