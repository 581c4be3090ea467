//! Normalized call result
//!
//! The one shape the outer presentation layer consumes; it never sees raw
//! transport objects. An HTTP error status is a normal, fully-formed result,
//! not an error kind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one executed call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCallResult {
    /// True exactly when the HTTP status class is 2xx
    pub success: bool,
    /// Status code, absent on network-level failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Parsed JSON body, or the raw text for non-JSON responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// `HTTP {status}: {reason}` for error statuses, or the transport/parse
    /// failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response headers, when a response was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Wall-clock duration of the round trip in milliseconds, reported even
    /// on failure
    pub execution_time_ms: u64,
}

impl ApiCallResult {
    /// A transport-level failure: no response was obtained at all
    pub fn transport_failure(error: String, execution_time_ms: u64) -> Self {
        Self {
            success: false,
            status_code: None,
            data: None,
            error: Some(error),
            headers: None,
            execution_time_ms,
        }
    }
}
