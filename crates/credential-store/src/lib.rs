//! # credential-store
//!
//! Persistent credential and session store keyed by API source identity.
//! Loaded synchronously before any request is synthesized; every mutation is
//! flushed to the backing JSON file before the call returns, so the persisted
//! store stays the sole source of truth across process restarts.

mod auth;
mod error;
mod record;
mod store;

pub use auth::AuthDescriptor;
pub use error::{StoreError, StoreResult};
pub use record::CredentialRecord;
pub use store::CredentialStore;
