//! PEM framing for certificates and private keys.
//!
//! Output matches Go's `encoding/pem`: 64-column base64, LF line endings and a
//! trailing newline, so TLS loaders on either side parse it unchanged.

use pem::{EncodeConfig, LineEnding, Pem};

use crate::error::PkiError;

/// Label for DER-encoded X.509 certificates.
pub const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Label for PKCS#1 DER-encoded RSA private keys.
pub const RSA_PRIVATE_KEY_TAG: &str = "RSA PRIVATE KEY";

const ENCODE_CONFIG: EncodeConfig = EncodeConfig::new().set_line_ending(LineEnding::LF);

/// Wrap DER certificate bytes in a `CERTIFICATE` block.
pub fn encode_certificate(der: &[u8]) -> String {
    encode_block(CERTIFICATE_TAG, der)
}

/// Wrap PKCS#1 private key bytes in an `RSA PRIVATE KEY` block.
pub fn encode_private_key(pkcs1_der: &[u8]) -> String {
    encode_block(RSA_PRIVATE_KEY_TAG, pkcs1_der)
}

/// Wrap arbitrary bytes in a labeled block.
pub fn encode_block(tag: &str, contents: &[u8]) -> String {
    pem::encode_config(&Pem::new(tag, contents), ENCODE_CONFIG)
}

/// Decode a single PEM block, checking its label.
pub fn decode_block(pem_text: &str, expected_tag: &str) -> Result<Vec<u8>, PkiError> {
    let block = pem::parse(pem_text).map_err(|e| PkiError::Decoding(e.to_string()))?;

    if block.tag() != expected_tag {
        return Err(PkiError::Decoding(format!(
            "expected '{}' block, got '{}'",
            expected_tag,
            block.tag()
        )));
    }

    Ok(block.into_contents())
}
