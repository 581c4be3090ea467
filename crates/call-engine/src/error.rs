//! Error types for the call engine
//!
//! Structural failures (unknown operation, missing parameters) abort a call
//! before any network I/O. Transport failures never surface here; they are
//! absorbed into the result type.

use thiserror::Error;

use crate::validate::MissingParameter;

/// Result type alias for call-engine operations
pub type CallResult<T> = std::result::Result<T, CallError>;

/// Call engine error types
#[derive(Error, Debug)]
pub enum CallError {
    /// Requested operation id is not in the index; carries the available ids
    /// so the caller can self-correct
    #[error("Operation '{operation_id}' not found, available: {}", available.join(", "))]
    OperationNotFound {
        operation_id: String,
        available: Vec<String>,
    },

    /// One or more required parameters are absent; every missing item is
    /// reported together
    #[error("Missing required parameters: {}", missing.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(", "))]
    ParameterValidationFailed { missing: Vec<MissingParameter> },

    /// Neither the document nor the caller supplied a base URL
    #[error("No base URL: document declares no servers and no override was given")]
    MissingBaseUrl,

    /// HTTP client construction failed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}
