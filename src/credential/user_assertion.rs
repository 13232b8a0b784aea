use std::collections::HashMap;

use crate::types::{AssertionType, CredentialReturnType, RequestParameterSource};

/// # UserAssertion
/// A pre issued assertion representing a user, presented in delegated
/// on-behalf-of token requests. The assertion is passed through verbatim;
/// validating it is the responsibility of whoever issued it upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAssertion {
    assertion: String,
    assertion_type: AssertionType,
}

impl UserAssertion {
    /// Creates a new [UserAssertion] of the default
    /// [AssertionType::JwtBearer] type. Construction never fails.
    pub fn new(assertion: impl Into<String>) -> Self {
        Self::new_with_type(assertion, AssertionType::default())
    }

    /// Creates a new [UserAssertion] with an explicit [AssertionType]
    pub fn new_with_type(assertion: impl Into<String>, assertion_type: AssertionType) -> Self {
        Self {
            assertion: assertion.into(),
            assertion_type,
        }
    }

    /// The assertion string as supplied by the caller
    pub fn assertion(&self) -> &str {
        &self.assertion
    }

    /// The declared type of the assertion
    pub fn assertion_type(&self) -> AssertionType {
        self.assertion_type
    }
}

impl RequestParameterSource for UserAssertion {
    fn request_params(&self) -> CredentialReturnType<HashMap<String, String>> {
        let mut params = HashMap::new();

        params.insert(
            "grant_type".to_owned(),
            self.assertion_type.as_str().to_owned(),
        );
        params.insert("assertion".to_owned(), self.assertion.clone());
        params.insert("requested_token_use".to_owned(), "on_behalf_of".to_owned());
        params.insert("scope".to_owned(), "openid".to_owned());

        Ok(params)
    }
}
