use std::time::{Duration, SystemTime};

use josekit::jws::alg::rsassa::RsassaJwsAlgorithm;
use josekit::jws::{self, JwsHeader};
use josekit::jwt::JwtPayload;
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::x509::X509;
use sha2::{Digest, Sha256};

use crate::helpers::{self, generate_random};
use crate::types::{CredentialError, CredentialReturnType};

/// Validity window of a freshly signed assertion, in seconds
pub const DEFAULT_ASSERTION_VALIDITY_SECS: i64 = 600;

/// # JwtAssertionSigner
/// Builds the claim set of a client assertion JWT for a client id and token
/// endpoint pair and signs it with RSA-SHA256 (RFC 7523).
///
/// Output is intentionally different on every invocation: each assertion
/// carries a fresh `jti` and a fresh expiry so it cannot be replayed across
/// token requests.
pub struct JwtAssertionSigner {
    client_id: String,
    token_endpoint: String,
    validity_secs: i64,
    pub(crate) now: fn() -> i64,
}

impl JwtAssertionSigner {
    /// Creates a new [JwtAssertionSigner] with the default validity window of
    /// [DEFAULT_ASSERTION_VALIDITY_SECS].
    pub fn new(client_id: impl Into<String>, token_endpoint: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            token_endpoint: token_endpoint.into(),
            validity_secs: DEFAULT_ASSERTION_VALIDITY_SECS,
            now: helpers::now,
        }
    }

    /// Overrides the validity window of signed assertions
    pub fn with_validity(mut self, validity_secs: i64) -> Self {
        self.validity_secs = validity_secs;
        self
    }

    /// Creates a JWT bound to this signer's client id and token endpoint and
    /// signs it with `private_key`. The JWS header carries the thumbprints of
    /// `certificate` so the verifier can locate the matching public key.
    pub fn create_and_sign_jwt(
        &self,
        certificate: &X509,
        private_key: &PKey<Private>,
    ) -> CredentialReturnType<String> {
        let header = build_header(certificate)?;
        let payload = self.build_payload();

        let pkcs8 = private_key.private_key_to_pkcs8().map_err(|_| {
            CredentialError::new_signing("private key could not be exported for signing")
        })?;

        let signer = RsassaJwsAlgorithm::Rs256
            .signer_from_der(&pkcs8)
            .map_err(|_| {
                CredentialError::new_signing("could not create a signer from the private key")
            })?;

        let payload_bytes = serde_json::to_vec(payload.claims_set())
            .map_err(|_| CredentialError::new_signing("could not convert payload to bytes"))?;

        jws::serialize_compact(&payload_bytes, &header, &signer)
            .map_err(|_| Box::new(CredentialError::new_signing("error while creating jwt")))
    }

    fn build_payload(&self) -> JwtPayload {
        let iat = (self.now)();
        let exp = iat + self.validity_secs;

        let mut payload = JwtPayload::new();

        payload.set_issuer(&self.client_id);
        payload.set_subject(&self.client_id);
        payload.set_audience(vec![self.token_endpoint.clone()]);
        payload.set_jwt_id(generate_random(None));

        if let Some(i) = SystemTime::UNIX_EPOCH.checked_add(Duration::from_secs(iat as u64)) {
            payload.set_issued_at(&i);
            payload.set_not_before(&i);
        }

        if let Some(e) = SystemTime::UNIX_EPOCH.checked_add(Duration::from_secs(exp as u64)) {
            payload.set_expires_at(&e);
        }

        payload
    }
}

fn build_header(certificate: &X509) -> CredentialReturnType<JwsHeader> {
    let der = certificate.to_der().map_err(|_| {
        CredentialError::new_signing("certificate could not be DER encoded")
    })?;

    let sha1_thumbprint = certificate.digest(MessageDigest::sha1()).map_err(|_| {
        CredentialError::new_signing("certificate thumbprint could not be computed")
    })?;

    let mut header = JwsHeader::new();
    header.set_token_type("JWT");
    header.set_algorithm("RS256");
    header.set_x509_certificate_sha1_thumbprint(&*sha1_thumbprint);
    header.set_x509_certificate_sha256_thumbprint(Sha256::digest(&der).to_vec());

    Ok(header)
}
