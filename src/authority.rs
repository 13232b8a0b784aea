//! # Authority
//! The token issuing authority assertions are addressed to

use crate::helpers::validate_url;
use crate::types::CredentialReturnType;

/// # Authority
/// An identity provider authority, reduced to the one thing assertion
/// construction needs from it: the token endpoint that will receive the
/// token request and therefore becomes the audience of signed assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    token_endpoint: String,
}

impl Authority {
    /// Creates a new [Authority]. `token_endpoint` must be an absolute URL.
    pub fn new(token_endpoint: &str) -> CredentialReturnType<Self> {
        validate_url(token_endpoint)?;

        Ok(Self {
            token_endpoint: token_endpoint.to_string(),
        })
    }

    /// The token endpoint of this authority
    pub fn token_endpoint(&self) -> &str {
        &self.token_endpoint
    }
}
