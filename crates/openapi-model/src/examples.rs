//! Example argument generation from informational schemas
//!
//! Schemas are never used to validate or coerce runtime values; the only
//! thing they feed is this display/documentation aid.

use serde_json::{Map, Value};

use crate::types::{OperationDescriptor, ParameterDescriptor};

/// Build an example argument bag for an operation: one entry per parameter,
/// plus `body_`-prefixed entries for the request body's properties.
pub fn example_arguments(operation: &OperationDescriptor) -> Map<String, Value> {
    let mut args = Map::new();

    for param in &operation.parameters {
        args.insert(param.name.clone(), example_for_parameter(param));
    }

    if let Some(body) = &operation.request_body {
        if let Some(properties) = body
            .schema
            .as_ref()
            .and_then(|s| s.get("properties"))
            .and_then(Value::as_object)
        {
            for (name, schema) in properties {
                args.insert(format!("body_{}", name), example_from_schema(Some(schema)));
            }
        }
    }

    args
}

fn example_for_parameter(param: &ParameterDescriptor) -> Value {
    if let Some(example) = &param.example {
        return example.clone();
    }
    example_from_schema(param.schema.as_ref())
}

/// Placeholder value derived from a schema: declared example first, then an
/// enum member, then a type-shaped default.
pub fn example_from_schema(schema: Option<&Value>) -> Value {
    let schema = match schema {
        Some(s) => s,
        None => return Value::String("value".to_string()),
    };

    if let Some(example) = schema.get("example") {
        return example.clone();
    }
    if let Some(first) = schema
        .get("enum")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    {
        return first.clone();
    }

    match schema.get("type").and_then(Value::as_str) {
        Some("integer") | Some("number") => Value::Number(0.into()),
        Some("boolean") => Value::Bool(true),
        Some("array") => {
            let item = example_from_schema(schema.get("items"));
            Value::Array(vec![item])
        }
        Some("object") => {
            let mut obj = Map::new();
            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                for (name, prop) in properties {
                    obj.insert(name.clone(), example_from_schema(Some(prop)));
                }
            }
            Value::Object(obj)
        }
        _ => match schema.get("format").and_then(Value::as_str) {
            Some(format) => Value::String(format.to_string()),
            None => Value::String("string".to_string()),
        },
    }
}
