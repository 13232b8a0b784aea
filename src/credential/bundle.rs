use openssl::pkcs12::Pkcs12;
use openssl::pkey::{PKey, Private};
use openssl::x509::X509;

use crate::types::{CredentialError, CredentialReturnType};

/// # CredentialBundle
/// An X509 certificate and its matching private key, extracted from a
/// combined container. PKCS12 is the only container format supported;
/// callers that already hold the two parts can pair them directly with
/// [CredentialBundle::new].
///
/// No policy is enforced here. Whether the key is RSA and large enough is
/// checked when a credential is constructed from the bundle.
#[derive(Debug)]
pub struct CredentialBundle {
    certificate: X509,
    private_key: PKey<Private>,
}

impl CredentialBundle {
    /// Pairs a certificate with a private key a caller has already extracted
    pub fn new(certificate: X509, private_key: PKey<Private>) -> Self {
        Self {
            certificate,
            private_key,
        }
    }

    /// Parses a DER encoded PKCS12 container protected by `passphrase`
    pub fn from_pkcs12_der(der: &[u8], passphrase: &str) -> CredentialReturnType<Self> {
        let pkcs12 = Pkcs12::from_der(der).map_err(|_| {
            CredentialError::new_invalid_input_format("only the PKCS12 container format is supported")
        })?;

        let parsed = pkcs12.parse2(passphrase).map_err(|_| {
            CredentialError::new_invalid_input_format("PKCS12 container could not be parsed")
        })?;

        let certificate = parsed.cert.ok_or(CredentialError::new_type_validation(
            "PKCS12 container does not hold an X509 certificate",
        ))?;

        let private_key = parsed.pkey.ok_or(CredentialError::new_type_validation(
            "PKCS12 container does not hold a private key",
        ))?;

        Ok(Self {
            certificate,
            private_key,
        })
    }

    /// The X509 certificate of this bundle
    pub fn certificate(&self) -> &X509 {
        &self.certificate
    }

    pub(crate) fn into_parts(self) -> (X509, PKey<Private>) {
        (self.certificate, self.private_key)
    }
}
