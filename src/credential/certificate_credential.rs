use std::collections::HashMap;

use openssl::pkey::{PKey, Private};
use openssl::x509::X509;

use crate::authority::Authority;
use crate::helpers;
use crate::types::{CredentialError, CredentialReturnType, RequestParameterSource};

use super::{ClientAssertion, CredentialBundle, JwtAssertionSigner};

/// Minimum size of the certificate public key accepted by default, in bits
pub const DEFAULT_MIN_KEY_SIZE_BITS: u32 = 2048;

/// # CertificateCredential
/// A confidential client credential backed by an X509 certificate and its
/// private key. The pair is validated against security policy once, at
/// construction; a credential that exists is always ready to sign.
///
/// Every call to [RequestParameterSource::request_params] signs a brand new
/// assertion bound to this credential's client id and the authority's token
/// endpoint. Assertions are never cached or reused.
#[derive(Debug)]
pub struct CertificateCredential {
    authority: Authority,
    client_id: String,
    certificate: X509,
    private_key: PKey<Private>,
    pub(crate) now: fn() -> i64,
}

impl CertificateCredential {
    /// Creates a new [CertificateCredential] with the default key size policy
    /// of [DEFAULT_MIN_KEY_SIZE_BITS].
    pub fn new(
        authority: Authority,
        client_id: impl Into<String>,
        bundle: CredentialBundle,
    ) -> CredentialReturnType<Self> {
        Self::new_with_min_key_size(authority, client_id, bundle, DEFAULT_MIN_KEY_SIZE_BITS)
    }

    /// Creates a new [CertificateCredential] with an explicit minimum public
    /// key size. Fails with a [CredentialError::TypeValidation] when the key
    /// material is not RSA and a [CredentialError::SecurityPolicy] when the
    /// certificate public key is below `min_key_size_bits`.
    pub fn new_with_min_key_size(
        authority: Authority,
        client_id: impl Into<String>,
        bundle: CredentialBundle,
        min_key_size_bits: u32,
    ) -> CredentialReturnType<Self> {
        let (certificate, private_key) = bundle.into_parts();

        validate_certificate_and_key(&certificate, &private_key, min_key_size_bits)?;

        Ok(Self {
            authority,
            client_id: client_id.into(),
            certificate,
            private_key,
            now: helpers::now,
        })
    }

    /// The client id of the calling application
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The X509 certificate of this credential. The private key is never
    /// exposed.
    pub fn certificate(&self) -> &X509 {
        &self.certificate
    }
}

impl RequestParameterSource for CertificateCredential {
    fn request_params(&self) -> CredentialReturnType<HashMap<String, String>> {
        let mut signer =
            JwtAssertionSigner::new(&self.client_id, self.authority.token_endpoint());
        signer.now = self.now;

        let assertion = signer.create_and_sign_jwt(&self.certificate, &self.private_key)?;

        ClientAssertion::new(&self.client_id, assertion).request_params()
    }
}

fn public_key_size_bits(certificate: &X509) -> CredentialReturnType<u32> {
    let public_key = certificate.public_key().map_err(|_| {
        CredentialError::new_type_validation("certificate does not hold a readable public key")
    })?;

    let rsa = public_key.rsa().map_err(|_| {
        CredentialError::new_type_validation("certificate public key must be an RSA key")
    })?;

    Ok(rsa.n().num_bytes() as u32 * 8)
}

fn validate_certificate_and_key(
    certificate: &X509,
    private_key: &PKey<Private>,
    min_key_size_bits: u32,
) -> CredentialReturnType<()> {
    if private_key.rsa().is_err() {
        return Err(Box::new(CredentialError::new_type_validation(
            "private_key must be an RSA private key",
        )));
    }

    if public_key_size_bits(certificate)? < min_key_size_bits {
        return Err(Box::new(CredentialError::new_security_policy(&format!(
            "certificate must contain a public key of at least {min_key_size_bits} bits"
        ))));
    }

    Ok(())
}
