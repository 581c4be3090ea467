//! Type definitions for normalized API documents

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// HTTP methods supported by OpenAPI path items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Whether a request body is sent for this method
    pub fn allows_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter location in the HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        };
        write!(f, "{}", s)
    }
}

/// A parameter declared by an operation
///
/// The schema is informational only. It feeds example generation and
/// documentation; runtime values are never coerced or type-checked against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name
    pub name: String,
    /// Where the parameter is embedded
    pub location: ParameterLocation,
    /// Whether the parameter is required (path parameters always are)
    pub required: bool,
    /// Parameter description
    pub description: Option<String>,
    /// JSON Schema for the parameter (informational)
    pub schema: Option<serde_json::Value>,
    /// Example value
    pub example: Option<serde_json::Value>,
    /// Whether the parameter is deprecated
    pub deprecated: bool,
}

/// Request body contract for an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBodyDescriptor {
    /// Whether the body is required
    pub required: bool,
    /// First declared media type (e.g. "application/json")
    pub content_type: String,
    /// JSON Schema for the body (informational)
    pub schema: Option<serde_json::Value>,
    /// Description
    pub description: Option<String>,
}

/// Response contract, keyed by status code string
///
/// Never enforced at call time; kept for documentation and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    /// HTTP status code (or "default")
    pub status_code: String,
    /// Content type of the response body
    pub content_type: Option<String>,
    /// JSON Schema for the response (informational)
    pub schema: Option<serde_json::Value>,
    /// Description
    pub description: Option<String>,
}

/// One HTTP-method-and-path combination described by the source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Unique operation id (from the document or derived)
    pub operation_id: String,
    /// HTTP method
    pub http_method: HttpMethod,
    /// URL path, may contain `{name}` placeholders
    pub path_template: String,
    /// Short summary
    pub summary: Option<String>,
    /// Full description
    pub description: Option<String>,
    /// Category labels, declaration order preserved
    pub tags: Vec<String>,
    /// Whether the operation is deprecated
    pub deprecated: bool,
    /// Merged path-item-level and operation-level parameters
    pub parameters: Vec<ParameterDescriptor>,
    /// Request body contract
    pub request_body: Option<RequestBodyDescriptor>,
    /// Response contracts
    pub responses: Vec<ResponseDescriptor>,
}

/// A normalized OpenAPI document, immutable after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDocument {
    /// Canonical origin of the document (resolved path or URL); the join key
    /// for credentials
    pub source_identity: String,
    /// API title
    pub title: String,
    /// API version
    pub version: String,
    /// API description
    pub description: Option<String>,
    /// Candidate server base URLs, declaration order preserved
    pub base_urls: Vec<String>,
    /// All extracted operations, uniquely keyed by operation id
    pub operations: Vec<OperationDescriptor>,
}

// --- Raw document structures for deserialization ---
//
// One shape covers both 2.x and 3.x: version-specific fields are optional and
// the normalizer decides which to read after version detection.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDocument {
    pub openapi: Option<String>,
    pub swagger: Option<String>,
    pub info: RawInfo,
    // 3.x servers
    #[serde(default)]
    pub servers: Vec<RawServer>,
    // 2.x host/basePath/schemes
    pub host: Option<String>,
    pub base_path: Option<String>,
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(default)]
    pub paths: IndexMap<String, RawPathItem>,
    pub components: Option<RawComponents>,
    // 2.x schema definitions
    #[serde(default)]
    pub definitions: IndexMap<String, serde_json::Value>,
    // 2.x reusable parameters
    #[serde(default)]
    pub parameters: IndexMap<String, RawParameter>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawInfo {
    pub title: String,
    pub description: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawServer {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPathItem {
    pub get: Option<RawOperation>,
    pub post: Option<RawOperation>,
    pub put: Option<RawOperation>,
    pub patch: Option<RawOperation>,
    pub delete: Option<RawOperation>,
    pub head: Option<RawOperation>,
    pub options: Option<RawOperation>,
    pub trace: Option<RawOperation>,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawOperation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    // 3.x request body
    pub request_body: Option<RawRequestBody>,
    // 2.x operation-level content types
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(default)]
    pub responses: IndexMap<String, RawResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawParameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "in", default)]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
    // 3.x nested schema (or 2.x body parameter schema)
    pub schema: Option<serde_json::Value>,
    pub example: Option<serde_json::Value>,
    #[serde(default)]
    pub deprecated: bool,
    // 2.x inline type information
    #[serde(rename = "type")]
    pub param_type: Option<String>,
    pub format: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,
    /// Reference to a reusable parameter
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
}

impl RawParameter {
    /// Effective schema: the nested schema, or one synthesized from 2.x
    /// inline type/format/enum fields.
    pub fn effective_schema(&self) -> Option<serde_json::Value> {
        if self.schema.is_some() {
            return self.schema.clone();
        }
        let mut obj = serde_json::Map::new();
        if let Some(t) = &self.param_type {
            obj.insert("type".to_string(), serde_json::Value::String(t.clone()));
        }
        if let Some(f) = &self.format {
            obj.insert("format".to_string(), serde_json::Value::String(f.clone()));
        }
        if let Some(e) = &self.enum_values {
            obj.insert("enum".to_string(), serde_json::Value::Array(e.clone()));
        }
        if obj.is_empty() {
            None
        } else {
            Some(serde_json::Value::Object(obj))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRequestBody {
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub content: IndexMap<String, RawMediaType>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawMediaType {
    pub schema: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawResponse {
    pub description: Option<String>,
    // 3.x content map
    pub content: Option<IndexMap<String, RawMediaType>>,
    // 2.x direct schema
    pub schema: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawComponents {
    #[serde(default)]
    pub schemas: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub parameters: IndexMap<String, RawParameter>,
}
