use std::collections::HashMap;

use crate::types::{CredentialReturnType, RequestParameterSource, JWT_BEARER};

/// # ClientAssertion
/// A client id paired with an assertion that was already produced for it.
/// [CertificateCredential](super::CertificateCredential) wraps every freshly
/// signed JWT in one of these; callers holding an externally issued client
/// assertion can use it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAssertion {
    client_id: String,
    assertion: String,
}

impl ClientAssertion {
    /// Creates a new [ClientAssertion]
    pub fn new(client_id: impl Into<String>, assertion: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            assertion: assertion.into(),
        }
    }

    /// The client id the assertion was produced for
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The assertion string
    pub fn assertion(&self) -> &str {
        &self.assertion
    }
}

impl RequestParameterSource for ClientAssertion {
    fn request_params(&self) -> CredentialReturnType<HashMap<String, String>> {
        let mut params = HashMap::new();

        params.insert("grant_type".to_owned(), JWT_BEARER.to_owned());
        params.insert("assertion".to_owned(), self.assertion.clone());
        params.insert("client_id".to_owned(), self.client_id.clone());

        Ok(params)
    }
}
