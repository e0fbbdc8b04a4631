//! Self-signed certificate authority for cluster TLS.
//!
//! A [`SelfManager`] sets up one root CA per cluster and issues leaf
//! certificates signed by it, returned as PEM text ready for TLS loaders.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use clusterpki_core::ClusterRef;
//! use clusterpki_pki::{MemoryStore, SelfManager};
//!
//! let cluster = ClusterRef::new("nifi", "simplenifi");
//! let manager = SelfManager::new(cluster, Arc::new(MemoryStore::new()))?;
//! let (cert_pem, key_pem) = manager.issue_certificate()?.into_pem_pair();
//! # let _ = (cert_pem, key_pem);
//! # Ok::<(), clusterpki_pki::PkiError>(())
//! ```

mod authority;
pub mod encoding;
mod entropy;
mod error;
mod issuer;
mod keys;
mod manager;
mod serial;
mod store;
mod subject;
mod validity;

pub use authority::{CaInfo, CertificateAuthority};
pub use entropy::{EntropySource, OsEntropy};
pub use error::PkiError;
pub use issuer::{CertificateIssuer, IssuedCertificate};
pub use manager::{PkiManager, SelfManager, SelfManagerBuilder};
pub use store::{CaStore, EphemeralStore, MemoryStore, StoreError, StoredCa};
