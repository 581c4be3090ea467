//! Call dispatch façade
//!
//! Ties the pieces together for one call: resolve the operation, validate
//! arguments, resolve auth, synthesize the request, execute. Structural
//! failures abort before any network I/O happens.

use serde_json::{Map, Value};
use tracing::debug;

use credential_store::{AuthDescriptor, CredentialStore};
use openapi_model::{ApiDocument, OperationDescriptor, OperationIndex};

use crate::engine::{CancelToken, EngineConfig, ExecutionEngine};
use crate::error::{CallError, CallResult};
use crate::request::synthesize;
use crate::result::ApiCallResult;
use crate::validate::validate_arguments;

/// One call as the dispatch shell describes it
#[derive(Debug, Clone, Default)]
pub struct CallRequest {
    /// Operation to invoke
    pub operation_id: String,
    /// Free-form argument bag
    pub arguments: Map<String, Value>,
    /// Inline auth for this call only; beats the stored descriptor
    pub auth_override: Option<AuthDescriptor>,
    /// Base URL override; beats the document's server list
    pub base_url_override: Option<String>,
    /// Optional cancellation handle
    pub cancel: Option<CancelToken>,
}

/// Call outcome handed back to the dispatch shell: the normalized result
/// plus the resolved operation for downstream formatting
#[derive(Debug, Clone)]
pub struct CallOutcome {
    pub operation: OperationDescriptor,
    pub result: ApiCallResult,
}

/// High-level client over the execution engine
pub struct ApiClient {
    engine: ExecutionEngine,
}

impl ApiClient {
    pub fn new(config: EngineConfig) -> CallResult<Self> {
        Ok(Self {
            engine: ExecutionEngine::new(config)?,
        })
    }

    /// Run one call against a normalized document
    pub async fn call(
        &self,
        document: &ApiDocument,
        store: &CredentialStore,
        request: CallRequest,
    ) -> CallResult<CallOutcome> {
        let index = OperationIndex::build(document);

        let operation = index.find_by_id(&request.operation_id).ok_or_else(|| {
            CallError::OperationNotFound {
                operation_id: request.operation_id.clone(),
                available: index
                    .operation_ids()
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
            }
        })?;

        validate_arguments(operation, &request.arguments)?;

        // Inline override first, then whatever the store has for this source
        let auth = request
            .auth_override
            .clone()
            .or_else(|| store.resolve(&document.source_identity).cloned());

        let base_url = match &request.base_url_override {
            Some(url) => url.clone(),
            None => document
                .base_urls
                .first()
                .cloned()
                .ok_or(CallError::MissingBaseUrl)?,
        };

        debug!(
            "Dispatching {} ({} {}) against {}",
            operation.operation_id, operation.http_method, operation.path_template, base_url
        );

        let http_request = synthesize(&base_url, operation, &request.arguments, auth.as_ref());

        let result = match &request.cancel {
            Some(token) => self.engine.execute_cancellable(&http_request, token).await,
            None => self.engine.execute(&http_request).await,
        };

        Ok(CallOutcome {
            operation: operation.clone(),
            result,
        })
    }
}
