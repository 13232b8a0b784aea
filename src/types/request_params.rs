use std::collections::HashMap;

use super::CredentialReturnType;

/// # RequestParameterSource
/// Shared capability of every assertion bearing credential: the OAuth token
/// request parameters it contributes, produced on demand and never stored.
/// A caller merges the returned mapping into the form body of a token request.
pub trait RequestParameterSource {
    /// The relevant parameters from this credential for OAuth
    fn request_params(&self) -> CredentialReturnType<HashMap<String, String>>;
}
