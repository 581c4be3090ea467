//! Error types for the credential store

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Credential store error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// Auth configuration is missing required fields; every missing field is
    /// reported, not just the first
    #[error("Invalid auth configuration, missing: {}", missing.join(", "))]
    AuthConfigInvalid { missing: Vec<String> },

    #[error("Unknown auth kind: {0}")]
    UnknownAuthKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
