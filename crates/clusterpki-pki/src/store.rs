//! Persistence collaborator for CA material.
//!
//! The manager asks the store for existing CA material on initialization and
//! hands newly generated material to it. Where the bytes end up (a secret
//! store, a database) is the implementor's business.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use clusterpki_core::ClusterRef;
use thiserror::Error;

/// Errors raised by a [`CaStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,

    #[error("store backend error: {0}")]
    Backend(String),
}

/// CA certificate and private key, both PEM encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCa {
    /// CA certificate (`CERTIFICATE` block).
    pub cert_pem: String,

    /// CA private key (`RSA PRIVATE KEY` block).
    pub key_pem: String,
}

impl fmt::Debug for StoredCa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCa")
            .field("cert_pem", &self.cert_pem)
            .field("key_pem", &"<redacted>")
            .finish()
    }
}

/// Load/save interface for CA material, keyed by cluster.
pub trait CaStore: Send + Sync {
    /// Fetch the CA for `cluster`, if one was saved.
    fn load(&self, cluster: &ClusterRef) -> Result<Option<StoredCa>, StoreError>;

    /// Save the CA for `cluster`.
    fn save(&self, cluster: &ClusterRef, ca: &StoredCa) -> Result<(), StoreError>;
}

/// Store that never keeps anything: every manager gets a brand new CA.
#[derive(Debug, Default, Clone, Copy)]
pub struct EphemeralStore;

impl CaStore for EphemeralStore {
    fn load(&self, _cluster: &ClusterRef) -> Result<Option<StoredCa>, StoreError> {
        Ok(None)
    }

    fn save(&self, _cluster: &ClusterRef, _ca: &StoredCa) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-process store, shared by managers of the same process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<ClusterRef, StoredCa>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clusters with a saved CA.
    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(entries) => entries.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CaStore for MemoryStore {
    fn load(&self, cluster: &ClusterRef) -> Result<Option<StoredCa>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(cluster).cloned())
    }

    fn save(&self, cluster: &ClusterRef, ca: &StoredCa) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(cluster.clone(), ca.clone());
        Ok(())
    }
}
