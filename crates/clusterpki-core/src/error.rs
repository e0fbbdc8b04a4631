//! Core domain errors.

use thiserror::Error;

/// Core domain errors for clusterpki.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Cluster reference could not be parsed.
    #[error("Invalid cluster reference '{0}': expected <namespace>/<name>")]
    InvalidClusterRef(String),
}
