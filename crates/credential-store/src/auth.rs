//! Authentication descriptors
//!
//! A closed set of auth kinds, each carrying only its own required fields.
//! Header application is a single exhaustive match so adding a kind is a
//! compile-time-visible change everywhere it matters.

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// How outbound calls for one source identity authenticate
///
/// Exactly one kind per descriptor; schemes do not compose.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AuthDescriptor {
    /// Static key in a named header
    ApiKey { header_name: String, api_key: String },
    /// `Authorization: Bearer <token>`
    Bearer { token: String },
    /// `Authorization: Basic <base64(user:pass)>`
    Basic { username: String, password: String },
    /// Caller-supplied, already-valid OAuth2 access token; no acquisition or
    /// refresh flow happens here
    OAuth2 { access_token: String },
}

impl AuthDescriptor {
    /// Build a descriptor from a kind name and a key/value config map,
    /// validating required sub-fields per kind. Every missing field is
    /// collected before failing.
    pub fn from_config(kind: &str, config: &Map<String, Value>) -> StoreResult<Self> {
        let field = |name: &str| {
            config
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let required: &[&str] = match kind {
            "apiKey" => &["headerName", "apiKey"],
            "bearer" => &["token"],
            "basic" => &["username", "password"],
            "oauth2" => &["accessToken"],
            other => return Err(StoreError::UnknownAuthKind(other.to_string())),
        };

        let missing: Vec<String> = required
            .iter()
            .filter(|name| field(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(StoreError::AuthConfigInvalid { missing });
        }

        // All required fields verified present above
        let descriptor = match kind {
            "apiKey" => AuthDescriptor::ApiKey {
                header_name: field("headerName").unwrap_or_default(),
                api_key: field("apiKey").unwrap_or_default(),
            },
            "bearer" => AuthDescriptor::Bearer {
                token: field("token").unwrap_or_default(),
            },
            "basic" => AuthDescriptor::Basic {
                username: field("username").unwrap_or_default(),
                password: field("password").unwrap_or_default(),
            },
            _ => AuthDescriptor::OAuth2 {
                access_token: field("accessToken").unwrap_or_default(),
            },
        };

        Ok(descriptor)
    }

    /// The header this descriptor applies, as a `(name, value)` pair
    pub fn header(&self) -> (String, String) {
        match self {
            AuthDescriptor::ApiKey { header_name, api_key } => {
                (header_name.clone(), api_key.clone())
            }
            AuthDescriptor::Bearer { token } => {
                ("Authorization".to_string(), format!("Bearer {}", token))
            }
            AuthDescriptor::Basic { username, password } => {
                let encoded = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", username, password));
                ("Authorization".to_string(), format!("Basic {}", encoded))
            }
            AuthDescriptor::OAuth2 { access_token } => {
                ("Authorization".to_string(), format!("Bearer {}", access_token))
            }
        }
    }

    /// Kind name, matching the configuration vocabulary
    pub fn kind(&self) -> &'static str {
        match self {
            AuthDescriptor::ApiKey { .. } => "apiKey",
            AuthDescriptor::Bearer { .. } => "bearer",
            AuthDescriptor::Basic { .. } => "basic",
            AuthDescriptor::OAuth2 { .. } => "oauth2",
        }
    }
}

// Secret material stays out of logs
impl std::fmt::Debug for AuthDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthDescriptor")
            .field("kind", &self.kind())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn builds_api_key_descriptor() {
        let auth = AuthDescriptor::from_config(
            "apiKey",
            &config(json!({"headerName": "X-API-Key", "apiKey": "secret"})),
        )
        .unwrap();

        assert_eq!(auth.header(), ("X-API-Key".to_string(), "secret".to_string()));
    }

    #[test]
    fn bearer_header_format() {
        let auth =
            AuthDescriptor::from_config("bearer", &config(json!({"token": "abc"}))).unwrap();
        assert_eq!(auth.header().1, "Bearer abc");
    }

    #[test]
    fn basic_header_is_base64() {
        let auth = AuthDescriptor::from_config(
            "basic",
            &config(json!({"username": "user", "password": "pass"})),
        )
        .unwrap();

        let (name, value) = auth.header();
        assert_eq!(name, "Authorization");
        // base64("user:pass")
        assert_eq!(value, "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn oauth2_token_is_sent_as_bearer() {
        let auth =
            AuthDescriptor::from_config("oauth2", &config(json!({"accessToken": "tok"}))).unwrap();
        assert_eq!(auth.header().1, "Bearer tok");
    }

    #[test]
    fn reports_every_missing_field() {
        let err = AuthDescriptor::from_config("basic", &config(json!({}))).unwrap_err();

        match err {
            StoreError::AuthConfigInvalid { missing } => {
                assert_eq!(missing, vec!["username", "password"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let err = AuthDescriptor::from_config(
            "apiKey",
            &config(json!({"headerName": "X-API-Key", "apiKey": ""})),
        )
        .unwrap_err();

        match err {
            StoreError::AuthConfigInvalid { missing } => assert_eq!(missing, vec!["apiKey"]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = AuthDescriptor::from_config("digest", &config(json!({}))).unwrap_err();
        assert!(matches!(err, StoreError::UnknownAuthKind(_)));
    }

    #[test]
    fn debug_redacts_secrets() {
        let auth = AuthDescriptor::Bearer { token: "sk-secret".to_string() };
        let rendered = format!("{:?}", auth);

        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
