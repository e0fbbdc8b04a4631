//! Errors raised while setting up the CA or issuing certificates.

use clusterpki_core::CoreError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during CA operations.
#[derive(Debug, Error)]
pub enum PkiError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("entropy source failed: {0}")]
    Entropy(#[source] rand::Error),

    #[error("failed to generate key pair: {0}")]
    KeyGeneration(String),

    #[error("failed to build certificate: {0}")]
    Certificate(String),

    #[error("failed to encode {what}: {reason}")]
    Encoding { what: &'static str, reason: String },

    #[error("failed to decode PEM block: {0}")]
    Decoding(String),

    #[error("stored CA material is unusable: {0}")]
    InvalidStoredCa(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("certificate authority is not initialized")]
    NotInitialized,

    #[error("certificate authority is already initialized")]
    AlreadyInitialized,
}
