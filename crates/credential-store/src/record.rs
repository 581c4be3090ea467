//! Persisted credential record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthDescriptor;

/// Persisted association between one API source identity and its auth
/// descriptor, plus bookkeeping timestamps and display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Canonical document origin (resolved path or URL); the join key
    pub api_source_identity: String,

    /// Configured auth, if any
    pub auth: Option<AuthDescriptor>,

    /// Cached API title for display
    pub title: Option<String>,

    /// Cached API version for display
    pub version: Option<String>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    /// Last time this record was used for a call
    pub last_used_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// Create a fresh record for a newly resolved source identity
    pub fn new(api_source_identity: &str, title: Option<String>, version: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            api_source_identity: api_source_identity.to_string(),
            auth: None,
            title,
            version,
            created_at: now,
            last_used_at: now,
        }
    }
}
