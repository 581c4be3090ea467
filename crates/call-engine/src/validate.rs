//! Argument validation precursor
//!
//! Presence/absence checks only: parameter schemas are informational and
//! runtime values pass through untyped. Validation collects every missing
//! item before failing so the caller can fix them all in one round.

use serde_json::{Map, Value};

use openapi_model::{OperationDescriptor, ParameterLocation};

use crate::error::{CallError, CallResult};

/// One missing required item, annotated with where it was expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParameter {
    pub name: String,
    /// `path`, `query`, `header`, `cookie`, or `body`
    pub location: String,
}

impl MissingParameter {
    fn at(name: &str, location: ParameterLocation) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    fn in_body(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: "body".to_string(),
        }
    }
}

impl std::fmt::Display for MissingParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}

/// Whether the argument bag carries a request body in either accepted form:
/// a `body` object, or at least one `body_`-prefixed key.
pub fn has_body_arguments(arguments: &Map<String, Value>) -> bool {
    if arguments.get("body").map(Value::is_object) == Some(true) {
        return true;
    }
    arguments.keys().any(|k| k.starts_with("body_"))
}

/// Validate the caller's argument bag against an operation's contract.
/// Fails once with the complete list of missing items, never just the first.
pub fn validate_arguments(
    operation: &OperationDescriptor,
    arguments: &Map<String, Value>,
) -> CallResult<()> {
    let mut missing = Vec::new();

    for param in &operation.parameters {
        if param.required && !arguments.contains_key(&param.name) {
            missing.push(MissingParameter::at(&param.name, param.location));
        }
    }

    if let Some(body) = &operation.request_body {
        if body.required && !has_body_arguments(arguments) {
            // Name the schema's required properties when it declares them,
            // otherwise report the body as a whole
            let required_props: Vec<&str> = body
                .schema
                .as_ref()
                .and_then(|s| s.get("required"))
                .and_then(Value::as_array)
                .map(|arr| arr.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();

            if required_props.is_empty() {
                missing.push(MissingParameter::in_body("body"));
            } else {
                for prop in required_props {
                    missing.push(MissingParameter::in_body(prop));
                }
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CallError::ParameterValidationFailed { missing })
    }
}
