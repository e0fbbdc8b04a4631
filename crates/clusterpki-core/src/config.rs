//! PKI configuration.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::subject::SubjectTemplate;

/// RSA modulus sizes accepted for CA and leaf keys.
pub const SUPPORTED_KEY_SIZES: [usize; 3] = [2048, 3072, 4096];

/// PKI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PkiConfig {
    /// Certificate lifetime in years, for the CA and for leaves.
    pub validity_years: u32,

    /// RSA key strength in bits.
    pub key_size_bits: usize,

    /// Distinguished-name template.
    pub subject: SubjectTemplate,

    /// IP Subject-Alternative-Names put on every leaf.
    pub leaf_ip_sans: Vec<IpAddr>,
}

impl PkiConfig {
    /// Check the configuration before any key material is generated.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.validity_years == 0 || self.validity_years > 100 {
            return Err(CoreError::InvalidConfig(format!(
                "validity_years must be between 1 and 100, got {}",
                self.validity_years
            )));
        }

        if !SUPPORTED_KEY_SIZES.contains(&self.key_size_bits) {
            return Err(CoreError::InvalidConfig(format!(
                "key_size_bits must be one of {:?}, got {}",
                SUPPORTED_KEY_SIZES, self.key_size_bits
            )));
        }

        if !self.subject.country.is_empty() && self.subject.country.len() != 2 {
            return Err(CoreError::InvalidConfig(format!(
                "subject country must be a two-letter code, got '{}'",
                self.subject.country
            )));
        }

        Ok(())
    }
}

impl Default for PkiConfig {
    fn default() -> Self {
        Self {
            validity_years: 10,
            key_size_bits: 4096,
            subject: SubjectTemplate::default(),
            leaf_ip_sans: vec![
                IpAddr::V4(Ipv4Addr::LOCALHOST),
                IpAddr::V6(Ipv6Addr::LOCALHOST),
            ],
        }
    }
}
