//! Leaf certificate issuance.

use chrono::{DateTime, Utc};
use clusterpki_core::PkiConfig;
use rcgen::{CertificateParams, ExtendedKeyUsagePurpose, IsCa, KeyUsagePurpose, SanType};

use crate::authority::CertificateAuthority;
use crate::encoding;
use crate::entropy::{seeded_rng, EntropySource};
use crate::error::PkiError;
use crate::keys::RsaKeyMaterial;
use crate::serial::random_serial;
use crate::subject::distinguished_name;
use crate::validity;

/// A leaf certificate and its private key, owned by the caller.
#[derive(Debug, Clone)]
pub struct IssuedCertificate {
    /// The signed certificate in PEM format.
    pub cert_pem: String,

    /// The PKCS#1 private key in PEM format.
    pub key_pem: String,

    /// Serial number (hex).
    pub serial: String,

    pub not_before: DateTime<Utc>,

    /// When the certificate expires.
    pub expires_at: DateTime<Utc>,
}

impl IssuedCertificate {
    /// Split into `(certificate_pem, private_key_pem)`.
    pub fn into_pem_pair(self) -> (String, String) {
        (self.cert_pem, self.key_pem)
    }
}

/// Mints end-entity certificates signed by one CA.
pub struct CertificateIssuer<'a> {
    authority: &'a CertificateAuthority,
    config: &'a PkiConfig,
    entropy: &'a dyn EntropySource,
}

impl<'a> CertificateIssuer<'a> {
    pub fn new(
        authority: &'a CertificateAuthority,
        config: &'a PkiConfig,
        entropy: &'a dyn EntropySource,
    ) -> Self {
        Self {
            authority,
            config,
            entropy,
        }
    }

    /// Issue one leaf certificate with a fresh key pair.
    ///
    /// Validity starts now and never outlasts the CA.
    pub fn issue(&self) -> Result<IssuedCertificate, PkiError> {
        self.config.validate()?;

        let mut rng = seeded_rng(self.entropy)?;
        let key = RsaKeyMaterial::generate(&mut rng, self.config.key_size_bits)?;
        let (serial_number, serial) = random_serial(&mut rng);

        let not_before = validity::now()?;
        let expires_at = validity::add_years(not_before, self.config.validity_years)?
            .min(self.authority.not_after());
        if expires_at <= not_before {
            return Err(PkiError::Certificate(format!(
                "CA expired at {}",
                self.authority.not_after()
            )));
        }

        let mut params = CertificateParams::default();
        params.serial_number = Some(serial_number);
        params.distinguished_name = distinguished_name(&self.config.subject)?;
        params.subject_alt_names = self
            .config
            .leaf_ip_sans
            .iter()
            .map(|ip| SanType::IpAddress(*ip))
            .collect();
        params.not_before = validity::to_offset(not_before)?;
        params.not_after = validity::to_offset(expires_at)?;
        params.is_ca = IsCa::NoCa;
        params.key_usages = vec![KeyUsagePurpose::DigitalSignature];
        params.extended_key_usages = vec![
            ExtendedKeyUsagePurpose::ClientAuth,
            ExtendedKeyUsagePurpose::ServerAuth,
        ];
        params.use_authority_key_identifier_extension = true;

        let certificate = self.authority.sign(params, key.key_pair())?;

        Ok(IssuedCertificate {
            cert_pem: encoding::encode_certificate(certificate.der()),
            key_pem: key.to_pkcs1_pem()?,
            serial,
            not_before,
            expires_at,
        })
    }
}
