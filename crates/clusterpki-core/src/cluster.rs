//! Identity of the cluster that owns a certificate authority.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Reference to the owning cluster resource.
///
/// Opaque to the PKI itself; it keys stored CA material and shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterRef {
    namespace: String,
    name: String,
}

impl ClusterRef {
    /// Create a new ClusterRef.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Namespace the cluster lives in.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name of the cluster.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ClusterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for ClusterRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((namespace, name))
                if !namespace.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(namespace, name))
            }
            _ => Err(CoreError::InvalidClusterRef(s.to_string())),
        }
    }
}
