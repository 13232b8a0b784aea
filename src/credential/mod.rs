//! # Credential module
//! Assertion producing credentials and their supporting types

mod bundle;
mod certificate_credential;
mod client_assertion;
mod jwt_signer;
mod user_assertion;

pub use bundle::CredentialBundle;
pub use certificate_credential::{CertificateCredential, DEFAULT_MIN_KEY_SIZE_BITS};
pub use client_assertion::ClientAssertion;
pub use jwt_signer::{JwtAssertionSigner, DEFAULT_ASSERTION_VALIDITY_SECS};
pub use user_assertion::UserAssertion;
