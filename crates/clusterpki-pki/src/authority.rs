//! Root certificate authority.
//!
//! Owns the root key pair and the self-signed root certificate. The private
//! key never leaves this crate: it is used for signing and handed to the
//! [`CaStore`](crate::CaStore) collaborator, nothing else.

use chrono::{DateTime, Utc};
use clusterpki_core::PkiConfig;
use rcgen::{
    BasicConstraints, Certificate, CertificateParams, ExtendedKeyUsagePurpose, IsCa, KeyPair,
    KeyUsagePurpose,
};
use sha2::{Digest, Sha256};
use tracing::debug;
use x509_parser::prelude::*;

use crate::encoding;
use crate::entropy::{seeded_rng, EntropySource};
use crate::error::PkiError;
use crate::keys::RsaKeyMaterial;
use crate::serial::random_serial;
use crate::store::StoredCa;
use crate::subject::distinguished_name;
use crate::validity;

/// Public metadata about a CA certificate.
#[derive(Debug, Clone)]
pub struct CaInfo {
    pub cert_pem: String,
    pub fingerprint: String, // sha256:hex
    pub serial: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

/// Self-signed root CA.
pub struct CertificateAuthority {
    /// rcgen view of the CA certificate, used as issuer when signing.
    certificate: Certificate,

    /// CA certificate (DER), as handed out.
    cert_der: Vec<u8>,

    /// CA certificate (PEM), as handed out.
    cert_pem: String,

    /// CA key pair.
    key: RsaKeyMaterial,

    /// Serial number (hex).
    serial: String,

    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
}

impl CertificateAuthority {
    /// Generate a fresh root key pair and self-sign a CA certificate.
    pub(crate) fn generate(
        config: &PkiConfig,
        entropy: &dyn EntropySource,
    ) -> Result<Self, PkiError> {
        config.validate()?;

        let mut rng = seeded_rng(entropy)?;
        let key = RsaKeyMaterial::generate(&mut rng, config.key_size_bits)?;
        let (serial_number, serial) = random_serial(&mut rng);

        let not_before = validity::now()?;
        let not_after = validity::add_years(not_before, config.validity_years)?;

        let mut params = CertificateParams::default();
        params.serial_number = Some(serial_number);
        params.distinguished_name = distinguished_name(&config.subject)?;
        params.not_before = validity::to_offset(not_before)?;
        params.not_after = validity::to_offset(not_after)?;
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        params.key_usages = vec![
            KeyUsagePurpose::DigitalSignature,
            KeyUsagePurpose::KeyCertSign,
        ];
        params.extended_key_usages = vec![
            ExtendedKeyUsagePurpose::ClientAuth,
            ExtendedKeyUsagePurpose::ServerAuth,
        ];

        let certificate = params
            .self_signed(key.key_pair())
            .map_err(|e| PkiError::Certificate(format!("failed to self-sign CA: {}", e)))?;

        let cert_der = certificate.der().to_vec();
        let cert_pem = encoding::encode_certificate(&cert_der);

        debug!(serial = %serial, key_size_bits = config.key_size_bits, "CA certificate generated");

        Ok(Self {
            certificate,
            cert_der,
            cert_pem,
            key,
            serial,
            not_before,
            not_after,
        })
    }

    /// Rebuild a CA from material previously handed to a store.
    ///
    /// The stored certificate must be a CA and the key must belong to it.
    pub(crate) fn restore(stored: &StoredCa) -> Result<Self, PkiError> {
        let cert_der = encoding::decode_block(&stored.cert_pem, encoding::CERTIFICATE_TAG)
            .map_err(|e| PkiError::InvalidStoredCa(format!("unreadable certificate: {}", e)))?;

        let (_, parsed) = X509Certificate::from_der(&cert_der).map_err(|e| {
            PkiError::InvalidStoredCa(format!("failed to parse certificate: {}", e))
        })?;

        let is_ca = matches!(parsed.basic_constraints(), Ok(Some(bc)) if bc.value.ca);
        if !is_ca {
            return Err(PkiError::InvalidStoredCa(
                "certificate is not a CA certificate".to_string(),
            ));
        }

        let key = RsaKeyMaterial::from_pkcs1_pem(&stored.key_pem)
            .map_err(|e| PkiError::InvalidStoredCa(format!("unreadable private key: {}", e)))?;
        if parsed.public_key().subject_public_key.data.as_ref() != key.public_key_pkcs1_der()? {
            return Err(PkiError::InvalidStoredCa(
                "private key does not match CA certificate".to_string(),
            ));
        }

        let serial = hex::encode(parsed.raw_serial());
        let not_before = validity::from_timestamp(parsed.validity().not_before.timestamp())?;
        let not_after = validity::from_timestamp(parsed.validity().not_after.timestamp())?;

        // rcgen needs its own Certificate to act as issuer; the stored DER stays
        // the one handed out.
        let params = CertificateParams::from_ca_cert_pem(&stored.cert_pem)
            .map_err(|e| PkiError::InvalidStoredCa(format!("failed to read CA: {}", e)))?;
        let certificate = params
            .self_signed(key.key_pair())
            .map_err(|e| PkiError::Certificate(format!("failed to reconstruct CA: {}", e)))?;

        debug!(serial = %serial, "CA certificate restored");

        Ok(Self {
            certificate,
            cert_pem: encoding::encode_certificate(&cert_der),
            cert_der,
            key,
            serial,
            not_before,
            not_after,
        })
    }

    /// Material for the store collaborator.
    pub(crate) fn to_stored(&self) -> Result<StoredCa, PkiError> {
        Ok(StoredCa {
            cert_pem: self.cert_pem.clone(),
            key_pem: self.key.to_pkcs1_pem()?,
        })
    }

    /// Sign `params` for `subject_key` with the CA key.
    pub(crate) fn sign(
        &self,
        params: CertificateParams,
        subject_key: &KeyPair,
    ) -> Result<Certificate, PkiError> {
        params
            .signed_by(subject_key, &self.certificate, self.key.key_pair())
            .map_err(|e| PkiError::Certificate(format!("failed to sign certificate: {}", e)))
    }

    /// Get the CA certificate in PEM format.
    pub fn certificate_pem(&self) -> &str {
        &self.cert_pem
    }

    /// Get the CA certificate in DER format.
    pub fn certificate_der(&self) -> &[u8] {
        &self.cert_der
    }

    /// Serial number as lowercase hex.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    pub fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    /// SHA-256 fingerprint of the DER certificate, `sha256:<hex>`.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.cert_der);
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }

    /// Get CA certificate metadata.
    pub fn info(&self) -> CaInfo {
        CaInfo {
            cert_pem: self.cert_pem.clone(),
            fingerprint: self.fingerprint(),
            serial: self.serial.clone(),
            not_before: self.not_before,
            not_after: self.not_after,
        }
    }
}
