//! Error types for document normalization

use thiserror::Error;

/// Result type alias for normalizer operations
pub type ModelResult<T> = std::result::Result<T, DocumentError>;

/// Normalizer error types
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid OpenAPI document: {0}")]
    Invalid(String),

    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("Circular reference: {0}")]
    CircularReference(String),
}
