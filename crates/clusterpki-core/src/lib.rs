//! clusterpki Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Cryptography backends
//! - Storage
//! - Logging setup
//!
//! Everything a cluster needs to describe the PKI it wants lives here.

pub mod cluster;
pub mod config;
pub mod error;
pub mod subject;

// Re-export commonly used types
pub use cluster::ClusterRef;
pub use config::PkiConfig;
pub use error::CoreError;
pub use subject::SubjectTemplate;
