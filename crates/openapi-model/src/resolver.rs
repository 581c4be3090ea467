//! JSON Schema `$ref` resolver
//!
//! Resolution runs to completion before any operation is extracted; an
//! unresolved or cyclic reference fails the whole document instead of leaving
//! a partially normalized model.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{DocumentError, ModelResult};

/// Resolves `$ref` references against a document's reusable schemas
pub struct SchemaResolver<'a> {
    /// Reusable schemas: `components/schemas` (3.x) or `definitions` (2.x)
    schemas: &'a IndexMap<String, Value>,
}

const REF_PREFIXES: [&str; 2] = ["#/components/schemas/", "#/definitions/"];

impl<'a> SchemaResolver<'a> {
    pub fn new(schemas: &'a IndexMap<String, Value>) -> Self {
        Self { schemas }
    }

    /// Resolve a schema, inlining every `$ref` it reaches
    pub fn resolve(&self, schema: &Value) -> ModelResult<Value> {
        let mut stack = Vec::new();
        self.resolve_inner(schema, &mut stack)
    }

    fn resolve_inner(&self, schema: &Value, stack: &mut Vec<String>) -> ModelResult<Value> {
        let obj = match schema {
            Value::Object(obj) => obj,
            _ => return Ok(schema.clone()),
        };

        if let Some(ref_str) = obj.get("$ref").and_then(Value::as_str) {
            let name = Self::ref_name(ref_str)
                .ok_or_else(|| DocumentError::UnresolvedReference(ref_str.to_string()))?;

            if stack.iter().any(|seen| seen == name) {
                return Err(DocumentError::CircularReference(ref_str.to_string()));
            }

            let target = self
                .schemas
                .get(name)
                .ok_or_else(|| DocumentError::UnresolvedReference(ref_str.to_string()))?;

            stack.push(name.to_string());
            let resolved = self.resolve_inner(target, stack)?;
            stack.pop();
            return Ok(resolved);
        }

        let mut result = serde_json::Map::new();
        for (key, value) in obj {
            let resolved = match key.as_str() {
                "properties" => self.resolve_map(value, stack)?,
                "items" | "additionalProperties" | "not" => self.resolve_inner(value, stack)?,
                "allOf" | "oneOf" | "anyOf" => self.resolve_array(value, stack)?,
                _ => value.clone(),
            };
            result.insert(key.clone(), resolved);
        }
        Ok(Value::Object(result))
    }

    /// Extract the schema name from a local ref like
    /// `#/components/schemas/Pet` or `#/definitions/Pet`
    fn ref_name(ref_str: &str) -> Option<&str> {
        REF_PREFIXES
            .iter()
            .find_map(|prefix| ref_str.strip_prefix(prefix))
    }

    fn resolve_map(&self, value: &Value, stack: &mut Vec<String>) -> ModelResult<Value> {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return Ok(value.clone()),
        };
        let mut result = serde_json::Map::new();
        for (key, prop) in obj {
            result.insert(key.clone(), self.resolve_inner(prop, stack)?);
        }
        Ok(Value::Object(result))
    }

    fn resolve_array(&self, value: &Value, stack: &mut Vec<String>) -> ModelResult<Value> {
        let arr = match value.as_array() {
            Some(arr) => arr,
            None => return Ok(value.clone()),
        };
        let items = arr
            .iter()
            .map(|item| self.resolve_inner(item, stack))
            .collect::<ModelResult<Vec<_>>>()?;
        Ok(Value::Array(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_simple_ref() {
        let mut schemas = IndexMap::new();
        schemas.insert(
            "User".to_string(),
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "email": {"type": "string"}
                },
                "required": ["name", "email"]
            }),
        );

        let resolver = SchemaResolver::new(&schemas);
        let resolved = resolver
            .resolve(&json!({"$ref": "#/components/schemas/User"}))
            .unwrap();

        assert_eq!(resolved["type"], "object");
        assert!(resolved["properties"]["name"].is_object());
    }

    #[test]
    fn resolves_swagger2_definitions_ref() {
        let mut schemas = IndexMap::new();
        schemas.insert("Pet".to_string(), json!({"type": "object"}));

        let resolver = SchemaResolver::new(&schemas);
        let resolved = resolver.resolve(&json!({"$ref": "#/definitions/Pet"})).unwrap();

        assert_eq!(resolved["type"], "object");
    }

    #[test]
    fn resolves_nested_ref() {
        let mut schemas = IndexMap::new();
        schemas.insert(
            "Address".to_string(),
            json!({
                "type": "object",
                "properties": {"street": {"type": "string"}}
            }),
        );
        schemas.insert(
            "User".to_string(),
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "address": {"$ref": "#/components/schemas/Address"}
                }
            }),
        );

        let resolver = SchemaResolver::new(&schemas);
        let resolved = resolver
            .resolve(&json!({"$ref": "#/components/schemas/User"}))
            .unwrap();

        assert_eq!(resolved["properties"]["address"]["type"], "object");
    }

    #[test]
    fn fails_on_unknown_ref() {
        let schemas = IndexMap::new();
        let resolver = SchemaResolver::new(&schemas);

        let err = resolver
            .resolve(&json!({"$ref": "#/components/schemas/Missing"}))
            .unwrap_err();

        assert!(matches!(err, DocumentError::UnresolvedReference(_)));
    }

    #[test]
    fn fails_on_cyclic_ref() {
        let mut schemas = IndexMap::new();
        schemas.insert(
            "Node".to_string(),
            json!({
                "type": "object",
                "properties": {"next": {"$ref": "#/components/schemas/Node"}}
            }),
        );

        let resolver = SchemaResolver::new(&schemas);
        let err = resolver
            .resolve(&json!({"$ref": "#/components/schemas/Node"}))
            .unwrap_err();

        assert!(matches!(err, DocumentError::CircularReference(_)));
    }

    #[test]
    fn fails_on_external_ref() {
        let schemas = IndexMap::new();
        let resolver = SchemaResolver::new(&schemas);

        let err = resolver
            .resolve(&json!({"$ref": "other.yaml#/Pet"}))
            .unwrap_err();

        assert!(matches!(err, DocumentError::UnresolvedReference(_)));
    }
}
