//! RSA key material.
//!
//! Keys are generated with the `rsa` crate so they can be written out as
//! PKCS#1, and handed to rcgen through PKCS#8 for signing.

use rand::rngs::StdRng;
use rcgen::KeyPair;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::RsaPrivateKey;

use crate::encoding;
use crate::error::PkiError;

/// An RSA private key together with its rcgen signing handle.
pub(crate) struct RsaKeyMaterial {
    private_key: RsaPrivateKey,
    key_pair: KeyPair,
}

impl RsaKeyMaterial {
    /// Generate a fresh key of `bits` size.
    pub(crate) fn generate(rng: &mut StdRng, bits: usize) -> Result<Self, PkiError> {
        let private_key = RsaPrivateKey::new(rng, bits).map_err(|e| {
            PkiError::KeyGeneration(format!("RSA-{} generation failed: {}", bits, e))
        })?;
        Self::from_private_key(private_key)
    }

    /// Load a key from an `RSA PRIVATE KEY` PEM block.
    pub(crate) fn from_pkcs1_pem(pem_text: &str) -> Result<Self, PkiError> {
        let der = encoding::decode_block(pem_text, encoding::RSA_PRIVATE_KEY_TAG)?;
        let private_key = RsaPrivateKey::from_pkcs1_der(&der)
            .map_err(|e| PkiError::Decoding(format!("invalid PKCS#1 private key: {}", e)))?;
        Self::from_private_key(private_key)
    }

    fn from_private_key(private_key: RsaPrivateKey) -> Result<Self, PkiError> {
        let pkcs8_pem = private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| PkiError::Encoding {
                what: "PKCS#8 private key",
                reason: e.to_string(),
            })?;

        let key_pair =
            KeyPair::from_pem(&pkcs8_pem).map_err(|e| PkiError::KeyGeneration(e.to_string()))?;

        Ok(Self {
            private_key,
            key_pair,
        })
    }

    /// rcgen handle used to sign or to embed the public key.
    pub(crate) fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Public key as PKCS#1 `RSAPublicKey` DER, as it appears in a certificate.
    pub(crate) fn public_key_pkcs1_der(&self) -> Result<Vec<u8>, PkiError> {
        self.private_key
            .to_public_key()
            .to_pkcs1_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|e| PkiError::Encoding {
                what: "RSA public key",
                reason: e.to_string(),
            })
    }

    /// Private key as an `RSA PRIVATE KEY` PEM block.
    pub(crate) fn to_pkcs1_pem(&self) -> Result<String, PkiError> {
        let der = self
            .private_key
            .to_pkcs1_der()
            .map_err(|e| PkiError::Encoding {
                what: "PKCS#1 private key",
                reason: e.to_string(),
            })?;
        Ok(encoding::encode_private_key(der.as_bytes()))
    }
}
