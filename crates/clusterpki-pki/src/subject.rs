//! Build the X.509 distinguished name from a [`SubjectTemplate`].

use clusterpki_core::SubjectTemplate;
use rcgen::{DistinguishedName, DnType, DnValue};

use crate::error::PkiError;

/// id-at-streetAddress (2.5.4.9).
const OID_STREET_ADDRESS: [u64; 4] = [2, 5, 4, 9];

/// id-at-postalCode (2.5.4.17).
const OID_POSTAL_CODE: [u64; 4] = [2, 5, 4, 17];

/// Convert the template into an rcgen distinguished name.
///
/// Attribute order is C, ST, L, street, postalCode, O, CN. Empty fields are
/// skipped.
pub(crate) fn distinguished_name(
    template: &SubjectTemplate,
) -> Result<DistinguishedName, PkiError> {
    let mut dn = DistinguishedName::new();

    if !template.country.is_empty() {
        dn.push(
            DnType::CountryName,
            DnValue::PrintableString(
                template.country.as_str().try_into().map_err(|e| {
                    PkiError::Certificate(format!("invalid country code: {}", e))
                })?,
            ),
        );
    }

    let text_fields = [
        (DnType::StateOrProvinceName, &template.province),
        (DnType::LocalityName, &template.locality),
        (DnType::CustomDnType(OID_STREET_ADDRESS.to_vec()), &template.street_address),
        (DnType::CustomDnType(OID_POSTAL_CODE.to_vec()), &template.postal_code),
        (DnType::OrganizationName, &template.organization),
    ];
    for (ty, value) in text_fields {
        if !value.is_empty() {
            dn.push(ty, value.as_str());
        }
    }

    if let Some(cn) = template.common_name.as_deref().filter(|cn| !cn.is_empty()) {
        dn.push(DnType::CommonName, cn);
    }

    Ok(dn)
}
