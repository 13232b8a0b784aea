#![warn(missing_docs)]
//! # OAuth Assertion
//!
//! This crate constructs the OAuth 2.0 assertions a confidential client
//! presents to an identity provider's token endpoint. A certificate backed
//! credential is validated against security policy and signs a fresh
//! JWT bearer assertion per request (RFC 7523); a user supplied assertion is
//! wrapped for delegated on-behalf-of requests. Both expose the token request
//! parameters they contribute through [types::RequestParameterSource].
//!
//! ## Authority
//!
//! - [authority::Authority::new]
//! - [authority::Authority::token_endpoint]
//!
//! ## Credentials
//!
//! ### Certificate backed
//! - [credential::CredentialBundle::from_pkcs12_der]
//! - [credential::CertificateCredential::new]
//! - [credential::CertificateCredential::new_with_min_key_size]
//!
//! ### Assertion signing
//! - [credential::JwtAssertionSigner::create_and_sign_jwt]
//!
//! ### Delegated on-behalf-of
//! - [credential::UserAssertion::new]
//!
//! ## Request parameters
//! - [types::RequestParameterSource::request_params]

pub mod authority;
pub mod credential;
pub mod helpers;
mod tests;
pub mod types;

/// Re exports from the crate
pub mod re_exports {
    pub use josekit::{self};
    pub use openssl::{self};
    pub use serde_json::{self, json, Value};
    pub use url;
}
