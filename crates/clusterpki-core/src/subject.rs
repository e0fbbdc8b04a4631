//! Distinguished-name template shared by a CA and every leaf it issues.

use serde::{Deserialize, Serialize};

/// Subject fields stamped onto every certificate of one manager.
///
/// Empty fields are left out of the encoded name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectTemplate {
    /// Organization (O).
    pub organization: String,

    /// Two-letter country code (C).
    pub country: String,

    /// State or province (ST).
    pub province: String,

    /// Locality (L).
    pub locality: String,

    /// Street address (street).
    pub street_address: String,

    /// Postal code.
    pub postal_code: String,

    /// Optional common name (CN).
    pub common_name: Option<String>,
}

impl Default for SubjectTemplate {
    fn default() -> Self {
        Self {
            organization: "Orange".to_string(),
            country: "FR".to_string(),
            province: String::new(),
            locality: "Paris".to_string(),
            street_address: "78 Rue Olivier de Serres".to_string(),
            postal_code: "75015".to_string(),
            common_name: None,
        }
    }
}
