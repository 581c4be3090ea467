//! Document normalizer
//!
//! Turns a raw OpenAPI 2.x or 3.x document (JSON or YAML text) into one
//! canonical [`ApiDocument`]: metadata, base URLs, and a flat operation list
//! with merged parameters. All `$ref` resolution happens before extraction;
//! a document that cannot be fully resolved is rejected whole.

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{DocumentError, ModelResult};
use crate::resolver::SchemaResolver;
use crate::types::*;

/// Detected document flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecVersion {
    /// Swagger 2.x (`swagger` field, `host`/`basePath`/`schemes`, `definitions`)
    V2,
    /// OpenAPI 3.x (`openapi` field, `servers`, `components`)
    V3,
}

/// Outcome of converting one raw parameter: 2.x `body`/`formData` entries
/// feed the request-body descriptor instead of the parameter list.
#[derive(Clone)]
enum ConvertedParameter {
    Plain(ParameterDescriptor),
    Body(RawParameter),
    Form(RawParameter),
}

/// OpenAPI 2.x/3.x normalizer
pub struct DocumentNormalizer;

impl DocumentNormalizer {
    /// Normalize a document from raw text (auto-detects JSON/YAML)
    pub fn normalize(content: &str, source_identity: &str) -> ModelResult<ApiDocument> {
        let content = Self::sanitize_large_numbers(content);

        // JSON first, YAML as the fallback
        let value: Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(_) => serde_yaml::from_str(&content).map_err(|_| {
                DocumentError::Invalid("content is neither JSON nor YAML".to_string())
            })?,
        };

        Self::normalize_value(value, source_identity)
    }

    /// Normalize an already parsed document value
    pub fn normalize_value(value: Value, source_identity: &str) -> ModelResult<ApiDocument> {
        let version = Self::detect_version(&value)?;

        let raw: RawDocument = serde_json::from_value(value)
            .map_err(|e| DocumentError::Invalid(format!("unexpected document shape: {}", e)))?;

        Self::convert(raw, version, source_identity)
    }

    /// Clamp integers too large for safe JSON parsing (> 15 digits)
    ///
    /// Some specs (like OpenAI's) use 2^63-scale numbers for min/max bounds,
    /// which trips serde_yaml. The bounds are informational, so the exact
    /// value does not matter.
    fn sanitize_large_numbers(content: &str) -> String {
        let re = Regex::new(
            r#"("?(?:minimum|maximum|exclusiveMinimum|exclusiveMaximum)"?\s*:\s*)(-?\d{16,})"#,
        )
        .expect("static regex");

        re.replace_all(content, |caps: &regex::Captures| {
            let prefix = &caps[1];
            if caps[2].starts_with('-') {
                format!("{}-2147483648", prefix)
            } else {
                format!("{}2147483647", prefix)
            }
        })
        .into_owned()
    }

    /// Decide which flavor the document is, or reject it
    fn detect_version(value: &Value) -> ModelResult<SpecVersion> {
        let obj = value
            .as_object()
            .ok_or_else(|| DocumentError::Invalid("document root is not an object".to_string()))?;

        if let Some(swagger) = obj.get("swagger").and_then(Value::as_str) {
            if swagger.starts_with("2.") {
                return Ok(SpecVersion::V2);
            }
            return Err(DocumentError::Invalid(format!(
                "unsupported swagger version: {}",
                swagger
            )));
        }

        if let Some(openapi) = obj.get("openapi").and_then(Value::as_str) {
            if openapi.starts_with("3.") {
                return Ok(SpecVersion::V3);
            }
            return Err(DocumentError::Invalid(format!(
                "unsupported openapi version: {}",
                openapi
            )));
        }

        // Heuristic: an info block plus paths/components still counts
        let looks_like_spec = obj.contains_key("info")
            && (obj.contains_key("paths")
                || obj.contains_key("components")
                || obj.contains_key("definitions"));
        if looks_like_spec {
            if obj.contains_key("definitions") || obj.contains_key("host") {
                return Ok(SpecVersion::V2);
            }
            return Ok(SpecVersion::V3);
        }

        Err(DocumentError::Invalid(
            "not a recognizable OpenAPI 2.x or 3.x document".to_string(),
        ))
    }

    fn convert(
        raw: RawDocument,
        version: SpecVersion,
        source_identity: &str,
    ) -> ModelResult<ApiDocument> {
        debug!(
            "Normalizing {:?} document '{}' from {}",
            version, raw.info.title, source_identity
        );

        let empty = IndexMap::new();
        let schemas = match version {
            SpecVersion::V3 => raw.components.as_ref().map(|c| &c.schemas).unwrap_or(&empty),
            SpecVersion::V2 => &raw.definitions,
        };
        let resolver = SchemaResolver::new(schemas);

        let empty_params = IndexMap::new();
        let parameter_defs = match version {
            SpecVersion::V3 => raw
                .components
                .as_ref()
                .map(|c| &c.parameters)
                .unwrap_or(&empty_params),
            SpecVersion::V2 => &raw.parameters,
        };

        let base_urls = Self::extract_base_urls(&raw, version);
        let operations = Self::extract_operations(&raw, version, &resolver, parameter_defs)?;

        debug!("Extracted {} operations", operations.len());

        Ok(ApiDocument {
            source_identity: source_identity.to_string(),
            title: raw.info.title,
            version: raw.info.version,
            description: raw.info.description,
            base_urls,
            operations,
        })
    }

    /// Server base URLs: 3.x uses the servers list verbatim; 2.x synthesizes
    /// `{scheme}://{host}{basePath}` from the first declared scheme.
    fn extract_base_urls(raw: &RawDocument, version: SpecVersion) -> Vec<String> {
        match version {
            SpecVersion::V3 => raw.servers.iter().map(|s| s.url.clone()).collect(),
            SpecVersion::V2 => match &raw.host {
                Some(host) => {
                    let scheme = raw.schemes.first().map(String::as_str).unwrap_or("https");
                    let base_path = raw.base_path.as_deref().unwrap_or("");
                    vec![format!("{}://{}{}", scheme, host, base_path)]
                }
                None => Vec::new(),
            },
        }
    }

    fn extract_operations(
        raw: &RawDocument,
        version: SpecVersion,
        resolver: &SchemaResolver,
        parameter_defs: &IndexMap<String, RawParameter>,
    ) -> ModelResult<Vec<OperationDescriptor>> {
        let mut operations = Vec::new();
        let mut used_ids = std::collections::HashSet::new();

        for (path, path_item) in &raw.paths {
            let path_params =
                Self::convert_parameters(&path_item.parameters, resolver, parameter_defs)?;

            let methods = [
                (HttpMethod::Get, &path_item.get),
                (HttpMethod::Post, &path_item.post),
                (HttpMethod::Put, &path_item.put),
                (HttpMethod::Patch, &path_item.patch),
                (HttpMethod::Delete, &path_item.delete),
                (HttpMethod::Head, &path_item.head),
                (HttpMethod::Options, &path_item.options),
                (HttpMethod::Trace, &path_item.trace),
            ];

            for (method, operation) in methods {
                if let Some(op) = operation {
                    let descriptor = Self::extract_operation(
                        path,
                        method,
                        op,
                        &path_params,
                        raw,
                        version,
                        resolver,
                        parameter_defs,
                        &mut used_ids,
                    )?;
                    operations.push(descriptor);
                }
            }
        }

        Ok(operations)
    }

    #[allow(clippy::too_many_arguments)]
    fn extract_operation(
        path: &str,
        method: HttpMethod,
        operation: &RawOperation,
        path_params: &[ConvertedParameter],
        raw: &RawDocument,
        version: SpecVersion,
        resolver: &SchemaResolver,
        parameter_defs: &IndexMap<String, RawParameter>,
        used_ids: &mut std::collections::HashSet<String>,
    ) -> ModelResult<OperationDescriptor> {
        let candidate = operation
            .operation_id
            .clone()
            .unwrap_or_else(|| Self::derive_operation_id(path, method));
        let operation_id = Self::unique_id(candidate, used_ids);

        // Path-item-level parameters first, operation-level entries override
        // on the (name, location) pair
        let mut merged: Vec<ParameterDescriptor> = Vec::new();
        let mut body_raw: Option<RawParameter> = None;
        let mut form_raws: Vec<RawParameter> = Vec::new();

        for converted in path_params.iter().cloned() {
            match converted {
                ConvertedParameter::Plain(p) => merged.push(p),
                ConvertedParameter::Body(b) => body_raw = Some(b),
                ConvertedParameter::Form(f) => form_raws.push(f),
            }
        }

        let op_params = Self::convert_parameters(&operation.parameters, resolver, parameter_defs)?;
        for converted in op_params {
            match converted {
                ConvertedParameter::Plain(param) => {
                    merged.retain(|existing| {
                        !(existing.name == param.name && existing.location == param.location)
                    });
                    merged.push(param);
                }
                ConvertedParameter::Body(b) => body_raw = Some(b),
                ConvertedParameter::Form(f) => form_raws.push(f),
            }
        }

        let request_body = match version {
            SpecVersion::V3 => operation
                .request_body
                .as_ref()
                .map(|body| Self::extract_request_body(body, resolver))
                .transpose()?,
            SpecVersion::V2 => {
                Self::extract_v2_body(body_raw.as_ref(), &form_raws, operation, raw, resolver)?
            }
        };

        let responses = Self::extract_responses(&operation.responses, resolver)?;

        Ok(OperationDescriptor {
            operation_id,
            http_method: method,
            path_template: path.to_string(),
            summary: operation.summary.clone(),
            description: operation.description.clone(),
            tags: operation.tags.clone(),
            deprecated: operation.deprecated,
            parameters: merged,
            request_body,
            responses,
        })
    }

    /// Derive an operation id from method and path:
    /// `GET /users/{id}/posts` -> `get_users_id_posts`
    fn derive_operation_id(path: &str, method: HttpMethod) -> String {
        let path_part = path
            .trim_start_matches('/')
            .replace('/', "_")
            .replace(['{', '}'], "");

        format!("{}_{}", method.as_str().to_lowercase(), path_part)
    }

    /// Guarantee operation-id uniqueness within one document by appending a
    /// numeric suffix (`_2`, `_3`, ...) on collision. Collisions are logged;
    /// they indicate a defective or id-less source document.
    fn unique_id(candidate: String, used: &mut std::collections::HashSet<String>) -> String {
        if used.insert(candidate.clone()) {
            return candidate;
        }

        let mut n = 2usize;
        loop {
            let disambiguated = format!("{}_{}", candidate, n);
            if used.insert(disambiguated.clone()) {
                warn!(
                    "Duplicate operation id '{}' in document, renamed to '{}'",
                    candidate, disambiguated
                );
                return disambiguated;
            }
            n += 1;
        }
    }

    /// Convert raw parameters, resolving `$ref` entries against the reusable
    /// parameter definitions. 2.x `body`/`formData` parameters are returned
    /// separately so they can feed the request-body descriptor.
    fn convert_parameters(
        params: &[RawParameter],
        resolver: &SchemaResolver,
        parameter_defs: &IndexMap<String, RawParameter>,
    ) -> ModelResult<Vec<ConvertedParameter>> {
        let mut converted = Vec::new();

        for param in params {
            let param = Self::resolve_parameter_ref(param, parameter_defs)?;

            if param.location == "body" {
                converted.push(ConvertedParameter::Body(param));
                continue;
            }
            if param.location == "formData" {
                converted.push(ConvertedParameter::Form(param));
                continue;
            }

            let location = match param.location.as_str() {
                "path" => ParameterLocation::Path,
                "query" => ParameterLocation::Query,
                "header" => ParameterLocation::Header,
                "cookie" => ParameterLocation::Cookie,
                other => {
                    return Err(DocumentError::Invalid(format!(
                        "parameter '{}' has unknown location '{}'",
                        param.name, other
                    )))
                }
            };

            let schema = param
                .effective_schema()
                .map(|s| resolver.resolve(&s))
                .transpose()?;

            converted.push(ConvertedParameter::Plain(ParameterDescriptor {
                name: param.name.clone(),
                location,
                // path parameters are required no matter what is declared
                required: param.required || location == ParameterLocation::Path,
                description: param.description.clone(),
                schema,
                example: param.example.clone(),
                deprecated: param.deprecated,
            }));
        }

        Ok(converted)
    }

    fn resolve_parameter_ref(
        param: &RawParameter,
        parameter_defs: &IndexMap<String, RawParameter>,
    ) -> ModelResult<RawParameter> {
        let mut current = param.clone();
        let mut hops = 0usize;

        while let Some(reference) = current.reference.clone() {
            if hops > 8 {
                return Err(DocumentError::CircularReference(reference));
            }
            let name = reference
                .strip_prefix("#/components/parameters/")
                .or_else(|| reference.strip_prefix("#/parameters/"))
                .ok_or_else(|| DocumentError::UnresolvedReference(reference.clone()))?;
            current = parameter_defs
                .get(name)
                .cloned()
                .ok_or_else(|| DocumentError::UnresolvedReference(reference.clone()))?;
            hops += 1;
        }

        Ok(current)
    }

    /// 3.x request body: the first declared content-type key wins, in source
    /// map insertion order. Documents with several body media types only
    /// expose the first one onward; a known narrowing.
    fn extract_request_body(
        body: &RawRequestBody,
        resolver: &SchemaResolver,
    ) -> ModelResult<RequestBodyDescriptor> {
        let (content_type, media) = match body.content.first() {
            Some(entry) => entry,
            None => {
                return Ok(RequestBodyDescriptor {
                    required: body.required,
                    content_type: "application/json".to_string(),
                    schema: None,
                    description: body.description.clone(),
                })
            }
        };

        let schema = media.schema.as_ref().map(|s| resolver.resolve(s)).transpose()?;

        Ok(RequestBodyDescriptor {
            required: body.required,
            content_type: content_type.clone(),
            schema,
            description: body.description.clone(),
        })
    }

    /// 2.x request body synthesized from `in: body` / `in: formData`
    /// parameters, which never surface in the parameter list.
    fn extract_v2_body(
        body_param: Option<&RawParameter>,
        form_params: &[RawParameter],
        operation: &RawOperation,
        raw: &RawDocument,
        resolver: &SchemaResolver,
    ) -> ModelResult<Option<RequestBodyDescriptor>> {
        let content_type = |fallback: &str| {
            operation
                .consumes
                .first()
                .or_else(|| raw.consumes.first())
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };

        if let Some(param) = body_param {
            let schema = param.schema.as_ref().map(|s| resolver.resolve(s)).transpose()?;
            return Ok(Some(RequestBodyDescriptor {
                required: param.required,
                content_type: content_type("application/json"),
                schema,
                description: param.description.clone(),
            }));
        }

        if form_params.is_empty() {
            return Ok(None);
        }

        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for param in form_params {
            let schema = param
                .effective_schema()
                .map(|s| resolver.resolve(&s))
                .transpose()?
                .unwrap_or(Value::Object(serde_json::Map::new()));
            properties.insert(param.name.clone(), schema);
            if param.required {
                required.push(Value::String(param.name.clone()));
            }
        }

        let schema = serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        });

        Ok(Some(RequestBodyDescriptor {
            required: form_params.iter().any(|p| p.required),
            content_type: content_type("application/x-www-form-urlencoded"),
            schema: Some(schema),
            description: None,
        }))
    }

    fn extract_responses(
        responses: &IndexMap<String, RawResponse>,
        resolver: &SchemaResolver,
    ) -> ModelResult<Vec<ResponseDescriptor>> {
        let mut out = Vec::new();

        for (status, response) in responses {
            let (content_type, schema) = match (&response.content, &response.schema) {
                // 3.x content map: prefer JSON, fall back to the first entry
                (Some(content), _) => content
                    .iter()
                    .find(|(ct, _)| ct.contains("json"))
                    .or_else(|| content.first())
                    .map(|(ct, media)| (Some(ct.clone()), media.schema.clone()))
                    .unwrap_or((None, None)),
                // 2.x direct schema
                (None, Some(schema)) => (None, Some(schema.clone())),
                (None, None) => (None, None),
            };

            let schema = schema.as_ref().map(|s| resolver.resolve(s)).transpose()?;

            out.push(ResponseDescriptor {
                status_code: status.clone(),
                content_type,
                schema,
                description: response.description.clone(),
            });
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_V3: &str = r#"
openapi: "3.0.0"
info:
  title: Pet Store
  version: "1.0.0"
servers:
  - url: https://api.example.com/v1
paths:
  /pets:
    get:
      operationId: listPets
      summary: List all pets
      tags: [pets]
      parameters:
        - name: status
          in: query
          schema:
            type: string
      responses:
        '200':
          description: A list of pets
    post:
      operationId: createPet
      tags: [pets]
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Pet'
      responses:
        '201':
          description: Pet created
  /pets/{petId}:
    parameters:
      - name: petId
        in: path
        required: true
        schema:
          type: string
    get:
      operationId: getPet
      tags: [pets]
      responses:
        '200':
          description: A pet
components:
  schemas:
    Pet:
      type: object
      properties:
        name:
          type: string
        status:
          type: string
      required: [name]
"#;

    const SAMPLE_V2: &str = r##"{
  "swagger": "2.0",
  "info": {"title": "Legacy API", "version": "2.1"},
  "host": "legacy.example.com",
  "basePath": "/api",
  "schemes": ["http", "https"],
  "paths": {
    "/users": {
      "post": {
        "operationId": "createUser",
        "consumes": ["application/json"],
        "parameters": [
          {
            "name": "user",
            "in": "body",
            "required": true,
            "schema": {"$ref": "#/definitions/User"}
          }
        ],
        "responses": {
          "201": {"description": "created", "schema": {"$ref": "#/definitions/User"}}
        }
      },
      "get": {
        "parameters": [
          {"name": "limit", "in": "query", "type": "integer", "format": "int32"}
        ],
        "responses": {"200": {"description": "ok"}}
      }
    }
  },
  "definitions": {
    "User": {
      "type": "object",
      "properties": {"username": {"type": "string"}, "email": {"type": "string"}},
      "required": ["username", "email"]
    }
  }
}"##;

    #[test]
    fn normalizes_v3_yaml() {
        let doc = DocumentNormalizer::normalize(SAMPLE_V3, "petstore.yaml").unwrap();

        assert_eq!(doc.title, "Pet Store");
        assert_eq!(doc.source_identity, "petstore.yaml");
        assert_eq!(doc.base_urls, vec!["https://api.example.com/v1"]);
        assert_eq!(doc.operations.len(), 3);
    }

    #[test]
    fn one_operation_per_declared_method() {
        let doc = DocumentNormalizer::normalize(SAMPLE_V3, "petstore.yaml").unwrap();

        let ids: Vec<&str> = doc.operations.iter().map(|o| o.operation_id.as_str()).collect();
        assert_eq!(ids, vec!["listPets", "createPet", "getPet"]);
    }

    #[test]
    fn path_level_parameters_are_inherited() {
        let doc = DocumentNormalizer::normalize(SAMPLE_V3, "petstore.yaml").unwrap();

        let get_pet = doc
            .operations
            .iter()
            .find(|op| op.operation_id == "getPet")
            .unwrap();
        assert_eq!(get_pet.parameters.len(), 1);
        assert_eq!(get_pet.parameters[0].name, "petId");
        assert_eq!(get_pet.parameters[0].location, ParameterLocation::Path);
        assert!(get_pet.parameters[0].required);
    }

    #[test]
    fn operation_level_parameter_overrides_path_level() {
        let spec = r#"
openapi: "3.0.0"
info: {title: T, version: "1"}
paths:
  /items:
    parameters:
      - name: limit
        in: query
        required: false
        schema: {type: integer}
    get:
      parameters:
        - name: limit
          in: query
          required: true
          schema: {type: string}
      responses:
        '200': {description: ok}
"#;
        let doc = DocumentNormalizer::normalize(spec, "t.yaml").unwrap();
        let op = &doc.operations[0];

        assert_eq!(op.parameters.len(), 1);
        assert!(op.parameters[0].required);
        assert_eq!(op.parameters[0].schema.as_ref().unwrap()["type"], "string");
    }

    #[test]
    fn request_body_ref_is_resolved() {
        let doc = DocumentNormalizer::normalize(SAMPLE_V3, "petstore.yaml").unwrap();

        let create = doc
            .operations
            .iter()
            .find(|op| op.operation_id == "createPet")
            .unwrap();
        let body = create.request_body.as_ref().unwrap();
        assert!(body.required);
        assert_eq!(body.content_type, "application/json");
        assert_eq!(body.schema.as_ref().unwrap()["properties"]["name"]["type"], "string");
    }

    #[test]
    fn first_declared_content_type_wins() {
        let spec = r#"
openapi: "3.0.0"
info: {title: T, version: "1"}
paths:
  /upload:
    post:
      operationId: upload
      requestBody:
        content:
          application/xml:
            schema: {type: string}
          application/json:
            schema: {type: object}
      responses:
        '200': {description: ok}
"#;
        let doc = DocumentNormalizer::normalize(spec, "t.yaml").unwrap();
        let body = doc.operations[0].request_body.as_ref().unwrap();

        assert_eq!(body.content_type, "application/xml");
    }

    #[test]
    fn normalizes_v2_json() {
        let doc = DocumentNormalizer::normalize(SAMPLE_V2, "legacy.json").unwrap();

        assert_eq!(doc.title, "Legacy API");
        assert_eq!(doc.base_urls, vec!["http://legacy.example.com/api"]);
        assert_eq!(doc.operations.len(), 2);
    }

    #[test]
    fn v2_body_parameter_becomes_request_body() {
        let doc = DocumentNormalizer::normalize(SAMPLE_V2, "legacy.json").unwrap();

        let create = doc
            .operations
            .iter()
            .find(|op| op.operation_id == "createUser")
            .unwrap();
        // the body parameter must not leak into the parameter list
        assert!(create.parameters.is_empty());

        let body = create.request_body.as_ref().unwrap();
        assert!(body.required);
        assert_eq!(body.content_type, "application/json");
        assert_eq!(
            body.schema.as_ref().unwrap()["required"],
            serde_json::json!(["username", "email"])
        );
    }

    #[test]
    fn v2_inline_type_synthesizes_schema() {
        let doc = DocumentNormalizer::normalize(SAMPLE_V2, "legacy.json").unwrap();

        let list = doc
            .operations
            .iter()
            .find(|op| op.operation_id == "get_users")
            .unwrap();
        let limit = &list.parameters[0];
        assert_eq!(limit.schema.as_ref().unwrap()["type"], "integer");
        assert_eq!(limit.schema.as_ref().unwrap()["format"], "int32");
    }

    #[test]
    fn missing_operation_id_is_derived() {
        let doc = DocumentNormalizer::normalize(SAMPLE_V2, "legacy.json").unwrap();

        assert!(doc.operations.iter().any(|op| op.operation_id == "get_users"));
    }

    #[test]
    fn derived_id_collisions_get_numeric_suffix() {
        let spec = r#"
openapi: "3.0.0"
info: {title: T, version: "1"}
paths:
  /a-b:
    get:
      responses: {'200': {description: ok}}
  /a/b:
    get:
      responses: {'200': {description: ok}}
  /a_b:
    get:
      responses: {'200': {description: ok}}
"#;
        let doc = DocumentNormalizer::normalize(spec, "t.yaml").unwrap();

        let mut ids: Vec<&str> = doc.operations.iter().map(|o| o.operation_id.as_str()).collect();
        let unique: std::collections::HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 3, "ids must stay unique: {:?}", ids);
        ids.sort();
        assert!(ids.contains(&"get_a_b_2"));
    }

    #[test]
    fn rejects_non_spec_text() {
        let err = DocumentNormalizer::normalize("just some prose, **not** a spec", "x").unwrap_err();
        assert!(matches!(err, DocumentError::Invalid(_)));
    }

    #[test]
    fn rejects_unsupported_version() {
        let err =
            DocumentNormalizer::normalize(r#"{"swagger": "1.2", "info": {"title": "t", "version": "1"}}"#, "x")
                .unwrap_err();
        assert!(matches!(err, DocumentError::Invalid(_)));
    }

    #[test]
    fn rejects_unresolved_ref() {
        let spec = r#"
openapi: "3.0.0"
info: {title: T, version: "1"}
paths:
  /x:
    post:
      operationId: x
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Missing'
      responses:
        '200': {description: ok}
"#;
        let err = DocumentNormalizer::normalize(spec, "t.yaml").unwrap_err();
        assert!(matches!(err, DocumentError::UnresolvedReference(_)));
    }

    #[test]
    fn heuristic_accepts_versionless_document() {
        let spec = r#"{"info": {"title": "T", "version": "1"}, "paths": {}}"#;
        let doc = DocumentNormalizer::normalize(spec, "x").unwrap();
        assert_eq!(doc.title, "T");
    }

    #[test]
    fn sanitizes_large_bounds() {
        let spec = r#"
openapi: "3.0.0"
info: {title: T, version: "1"}
paths: {}
components:
  schemas:
    Seeded:
      type: object
      properties:
        seed:
          type: integer
          minimum: -9223372036854776000
          maximum: 9223372036854776000
"#;
        assert!(DocumentNormalizer::normalize(spec, "t.yaml").is_ok());
    }
}
