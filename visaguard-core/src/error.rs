// visaguard-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisaguardError {
    // --- DOMAIN ERRORS (schema, dataset reads, drift) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- STAGE BOUNDARY ---
    // Single error-mapping boundary at the validation stage's public entry:
    // internal helpers propagate Domain/Infrastructure kinds, the orchestrator
    // wraps whatever escapes into this variant with run context.
    #[error("Validation stage failed ({context})")]
    ValidationStage {
        context: String,
        #[source]
        source: Box<VisaguardError>,
    },

    // --- GENERIC / APPLICATIVE ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),

    #[error("Unsafe path traversal detected: {0}")]
    UnsafePath(String),
}

impl VisaguardError {
    /// Wraps any pipeline failure at the validation stage boundary.
    pub fn in_validation_stage(context: impl Into<String>) -> impl FnOnce(Self) -> Self {
        let context = context.into();
        move |source| VisaguardError::ValidationStage {
            context,
            source: Box::new(source),
        }
    }
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for VisaguardError {
    fn from(err: std::io::Error) -> Self {
        VisaguardError::Infrastructure(InfrastructureError::Io(err))
    }
}
