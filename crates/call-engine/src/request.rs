//! Request synthesis
//!
//! Pure and deterministic: the same operation, arguments, base URL, and auth
//! descriptor always synthesize the byte-identical request. Validation has
//! already run by the time this module is reached.

use serde_json::{Map, Value};

use credential_store::AuthDescriptor;
use openapi_model::{HttpMethod, OperationDescriptor, ParameterLocation};

/// A transport-ready HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Ordered header set; later writes to the same name replace in place
    pub headers: Vec<(String, String)>,
    /// Serialized body, when one is sent
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of a header, case-insensitive name match
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn set_header(&mut self, name: &str, value: String) {
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }
}

/// Render an argument value as the string embedded in a URL or header.
/// Strings pass through bare; everything else uses its JSON rendering.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build a transport-ready request from an operation and an argument bag.
///
/// Query values are percent-encoded with `%20` for spaces (never `+`), in
/// the parameters' declared order. Header precedence, lowest to highest:
/// JSON defaults, caller header parameters, auth — auth always wins so an
/// authenticated call cannot be silently downgraded.
pub fn synthesize(
    base_url: &str,
    operation: &OperationDescriptor,
    arguments: &Map<String, Value>,
    auth: Option<&AuthDescriptor>,
) -> HttpRequest {
    // Exactly one slash between base and path
    let mut path = operation.path_template.clone();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }

    // Path parameters, percent-encoded; validation guaranteed presence
    for param in &operation.parameters {
        if param.location != ParameterLocation::Path {
            continue;
        }
        if let Some(value) = arguments.get(&param.name) {
            let encoded = urlencoding::encode(&value_to_string(value)).into_owned();
            path = path.replace(&format!("{{{}}}", param.name), &encoded);
        }
    }

    // Query string in declared order; absent parameters are omitted entirely
    let mut query_parts = Vec::new();
    for param in &operation.parameters {
        if param.location != ParameterLocation::Query {
            continue;
        }
        if let Some(value) = arguments.get(&param.name) {
            let encoded = urlencoding::encode(&value_to_string(value)).into_owned();
            query_parts.push(format!("{}={}", param.name, encoded));
        }
    }

    let mut url = format!("{}{}", base_url.trim_end_matches('/'), path);
    if !query_parts.is_empty() {
        url.push('?');
        url.push_str(&query_parts.join("&"));
    }

    let mut request = HttpRequest {
        method: operation.http_method,
        url,
        headers: Vec::new(),
        body: None,
    };

    // Defaults first
    request.set_header("Content-Type", "application/json".to_string());
    request.set_header("Accept", "application/json".to_string());

    // Caller header parameters next; only headers the operation models are
    // injectable through this path
    for param in &operation.parameters {
        if param.location != ParameterLocation::Header {
            continue;
        }
        if let Some(value) = arguments.get(&param.name) {
            request.set_header(&param.name, value_to_string(value));
        }
    }

    // Auth last, always winning
    if let Some(auth) = auth {
        let (name, value) = auth.header();
        request.set_header(&name, value);
    }

    request.body = build_body(operation, arguments);

    request
}

/// Body construction, only for body-bearing methods with a declared request
/// body: a caller `body` object is serialized verbatim; otherwise `body_`
/// prefixed arguments assemble one flat object; otherwise an optional body
/// sends `{}`.
fn build_body(operation: &OperationDescriptor, arguments: &Map<String, Value>) -> Option<String> {
    if !operation.http_method.allows_body() {
        return None;
    }
    let declared = operation.request_body.as_ref()?;

    if let Some(Value::Object(body)) = arguments.get("body") {
        return serde_json::to_string(body).ok();
    }

    let mut assembled = Map::new();
    for (key, value) in arguments {
        if let Some(field) = key.strip_prefix("body_") {
            assembled.insert(field.to_string(), value.clone());
        }
    }
    if !assembled.is_empty() {
        return serde_json::to_string(&assembled).ok();
    }

    if declared.required {
        // Validation rejects this case before synthesis; nothing sensible to
        // send if we ever get here
        None
    } else {
        Some("{}".to_string())
    }
}
