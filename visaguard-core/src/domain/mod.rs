pub mod artifact;
pub mod dataset;
pub mod drift;
pub mod error;
pub mod ports;
pub mod schema;

// Convenient re-exports to simplify imports elsewhere
pub use error::DomainError;
