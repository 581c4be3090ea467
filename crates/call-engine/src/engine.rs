//! Execution engine
//!
//! Sends a synthesized request over HTTP and normalizes whatever comes back
//! into an [`ApiCallResult`]. Nothing escapes the boundary: transport
//! failures, bad JSON, and error statuses all land in the result shape, so
//! the calling workflow always completes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::{CallError, CallResult};
use crate::request::HttpRequest;
use crate::result::ApiCallResult;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Per-request timeout; a call that never hears back fails with a
    /// transport error instead of suspending forever
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// Cancellation handle threaded through an in-flight call
///
/// Cloning shares the same cancellation state; cancelling from any clone
/// resolves a pending call into a transport-failure result.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: std::sync::Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: std::sync::Arc::new(tx),
            rx,
        }
    }

    /// Request cancellation; idempotent
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once cancellation is requested
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        while !*rx.borrow() {
            if rx.changed().await.is_err() {
                // Sender gone without cancelling; never resolves
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP execution engine
pub struct ExecutionEngine {
    client: reqwest::Client,
}

impl ExecutionEngine {
    pub fn new(config: EngineConfig) -> CallResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CallError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    /// Execute a request and normalize the outcome. Never fails past this
    /// boundary.
    pub async fn execute(&self, request: &HttpRequest) -> ApiCallResult {
        let started = Instant::now();
        let result = self.round_trip(request).await;
        let execution_time_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(mut result) => {
                result.execution_time_ms = execution_time_ms;
                result
            }
            Err(e) => {
                warn!("Transport failure for {} {}: {}", request.method, request.url, e);
                ApiCallResult::transport_failure(e.to_string(), execution_time_ms)
            }
        }
    }

    /// Execute with a cancellation token. Cancellation yields a
    /// transport-failure result with the execution time so far.
    pub async fn execute_cancellable(
        &self,
        request: &HttpRequest,
        cancel: &CancelToken,
    ) -> ApiCallResult {
        let started = Instant::now();

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                let execution_time_ms = started.elapsed().as_millis() as u64;
                debug!("Call to {} cancelled", request.url);
                ApiCallResult::transport_failure("Request cancelled".to_string(), execution_time_ms)
            }
            result = self.execute(request) => result,
        }
    }

    async fn round_trip(&self, request: &HttpRequest) -> Result<ApiCallResult, reqwest::Error> {
        debug!("Executing {} {}", request.method, request.url);

        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .unwrap_or(reqwest::Method::GET);

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect();
        let content_type = headers
            .get("content-type")
            .cloned()
            .unwrap_or_default();

        let text = response.text().await?;

        // JSON content types get parsed; a parse failure on claimed JSON is
        // captured, and the call still reports its true status
        let (data, parse_error) = if content_type.contains("json") {
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => (Some(value), None),
                Err(e) => (
                    if text.is_empty() { None } else { Some(Value::String(text)) },
                    Some(format!("Failed to parse JSON response: {}", e)),
                ),
            }
        } else if text.is_empty() {
            (None, None)
        } else {
            (Some(Value::String(text)), None)
        };

        let success = status.is_success();
        let error = if !success {
            Some(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ))
        } else {
            parse_error
        };

        debug!("Response status {} from {}", status, request.url);

        Ok(ApiCallResult {
            success,
            status_code: Some(status.as_u16()),
            data,
            error,
            headers: Some(headers),
            execution_time_ms: 0, // filled in by execute()
        })
    }
}
