//! Persisted credential store
//!
//! One JSON file per store instance, loaded eagerly at construction and
//! flushed synchronously on every mutation. Two sequential calls therefore
//! always observe a consistent view, and a fresh process sees exactly what
//! the previous one persisted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::AuthDescriptor;
use crate::error::StoreResult;
use crate::record::CredentialRecord;

/// On-disk shape of the store file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    /// File format version
    #[serde(default)]
    version: u32,
    /// Pointer to the current session
    #[serde(default)]
    active_session_id: Option<Uuid>,
    /// Records keyed by API source identity
    #[serde(default)]
    records: HashMap<String, CredentialRecord>,
}

const STORE_FILE_VERSION: u32 = 1;

/// Keyed map from API source identity to credential record, persisted to one
/// JSON file. The store exclusively owns persisted records; readers only see
/// resolved descriptors.
pub struct CredentialStore {
    path: PathBuf,
    active_session_id: Option<Uuid>,
    records: HashMap<String, CredentialRecord>,
}

impl CredentialStore {
    /// Load a store from its file, eagerly, before any request can be
    /// synthesized. A missing file is an empty store; a corrupt file degrades
    /// to an empty store instead of failing startup.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let file = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<StoreFile>(&contents) {
                Ok(file) => file,
                Err(e) => {
                    warn!("Corrupt credential store at {:?}, starting empty: {}", path, e);
                    StoreFile::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
            Err(e) => {
                warn!("Unreadable credential store at {:?}, starting empty: {}", path, e);
                StoreFile::default()
            }
        };

        debug!("Loaded {} credential records from {:?}", file.records.len(), path);

        Self {
            path,
            active_session_id: file.active_session_id,
            records: file.records,
        }
    }

    /// Resolve the auth descriptor for a source identity, exact match only.
    /// No fuzzy matching between hosts: two documents on the same host keep
    /// independent credentials.
    pub fn resolve(&self, api_source_identity: &str) -> Option<&AuthDescriptor> {
        self.records
            .get(api_source_identity)
            .and_then(|record| record.auth.as_ref())
    }

    /// Full record for a source identity
    pub fn record(&self, api_source_identity: &str) -> Option<&CredentialRecord> {
        self.records.get(api_source_identity)
    }

    /// Register a source identity after successful document resolution.
    /// Creates the record on first sight; refreshes cached display metadata
    /// on an existing one without touching its auth.
    pub fn register(
        &mut self,
        api_source_identity: &str,
        title: Option<String>,
        version: Option<String>,
    ) -> StoreResult<()> {
        match self.records.get_mut(api_source_identity) {
            Some(record) => {
                record.title = title;
                record.version = version;
            }
            None => {
                debug!("New credential record for {}", api_source_identity);
                self.records.insert(
                    api_source_identity.to_string(),
                    CredentialRecord::new(api_source_identity, title, version),
                );
            }
        }
        self.flush()
    }

    /// Attach or replace the auth descriptor for a source identity.
    /// Descriptor validation happened at construction; an identity without a
    /// record gets one implicitly.
    pub fn upsert_auth(
        &mut self,
        api_source_identity: &str,
        auth: AuthDescriptor,
    ) -> StoreResult<()> {
        let record = self
            .records
            .entry(api_source_identity.to_string())
            .or_insert_with(|| CredentialRecord::new(api_source_identity, None, None));
        record.auth = Some(auth);
        self.flush()
    }

    /// Bump `last_used_at` for a source identity
    pub fn touch(&mut self, api_source_identity: &str) -> StoreResult<()> {
        if let Some(record) = self.records.get_mut(api_source_identity) {
            record.last_used_at = Utc::now();
            self.flush()?;
        }
        Ok(())
    }

    /// Destroy a record and its credentials. The only way they go away.
    pub fn remove(&mut self, api_source_identity: &str) -> StoreResult<bool> {
        let removed = self.records.remove(api_source_identity).is_some();
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    /// Current session id, creating and persisting one if absent
    pub fn ensure_session(&mut self) -> StoreResult<Uuid> {
        if let Some(id) = self.active_session_id {
            return Ok(id);
        }
        let id = Uuid::new_v4();
        self.active_session_id = Some(id);
        self.flush()?;
        Ok(id)
    }

    /// All known source identities
    pub fn identities(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably write the store file. Every mutation calls this before
    /// returning; there is no write-behind.
    fn flush(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = StoreFile {
            version: STORE_FILE_VERSION,
            active_session_id: self.active_session_id,
            records: self.records.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, json)?;

        debug!("Flushed {} credential records to {:?}", self.records.len(), self.path);
        Ok(())
    }
}
