use std::fmt;

/// # Error
/// Description of a single failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Descriptive message
    pub message: String,
}

/// # CredentialError
/// Error that will be returned to the end user of this library. Every failure
/// is raised at the point of construction or signing; nothing is swallowed,
/// logged or retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The supplied credential bundle is not a recognized container format
    InvalidInputFormat(Error),
    /// The extracted certificate or key is not of the expected cryptographic type
    TypeValidation(Error),
    /// The key material does not meet the configured security policy
    SecurityPolicy(Error),
    /// The cryptographic signing step failed
    Signing(Error),
}

impl CredentialError {
    fn inner(message: &str) -> Error {
        Error {
            message: message.to_string(),
        }
    }

    /// Creates a new [CredentialError::InvalidInputFormat]
    pub fn new_invalid_input_format(message: &str) -> Self {
        Self::InvalidInputFormat(Self::inner(message))
    }

    /// Creates a new [CredentialError::TypeValidation]
    pub fn new_type_validation(message: &str) -> Self {
        Self::TypeValidation(Self::inner(message))
    }

    /// Creates a new [CredentialError::SecurityPolicy]
    pub fn new_security_policy(message: &str) -> Self {
        Self::SecurityPolicy(Self::inner(message))
    }

    /// Creates a new [CredentialError::Signing]
    pub fn new_signing(message: &str) -> Self {
        Self::Signing(Self::inner(message))
    }

    /// Returns `true` if the error is an [CredentialError::InvalidInputFormat]
    pub fn is_invalid_input_format(&self) -> bool {
        matches!(self, Self::InvalidInputFormat(_))
    }

    /// Returns `true` if the error is a [CredentialError::TypeValidation]
    pub fn is_type_validation(&self) -> bool {
        matches!(self, Self::TypeValidation(_))
    }

    /// Returns `true` if the error is a [CredentialError::SecurityPolicy]
    pub fn is_security_policy(&self) -> bool {
        matches!(self, Self::SecurityPolicy(_))
    }

    /// Returns `true` if the error is a [CredentialError::Signing]
    pub fn is_signing(&self) -> bool {
        matches!(self, Self::Signing(_))
    }

    /// The inner [Error] of an [CredentialError::InvalidInputFormat]. Panics
    /// if the error is of a different kind.
    pub fn invalid_input_format_error(&self) -> &Error {
        match self {
            Self::InvalidInputFormat(e) => e,
            _ => panic!("error is not an InvalidInputFormat"),
        }
    }

    /// The inner [Error] of a [CredentialError::TypeValidation]. Panics
    /// if the error is of a different kind.
    pub fn type_validation_error(&self) -> &Error {
        match self {
            Self::TypeValidation(e) => e,
            _ => panic!("error is not a TypeValidation"),
        }
    }

    /// The inner [Error] of a [CredentialError::SecurityPolicy]. Panics
    /// if the error is of a different kind.
    pub fn security_policy_error(&self) -> &Error {
        match self {
            Self::SecurityPolicy(e) => e,
            _ => panic!("error is not a SecurityPolicy"),
        }
    }

    /// The inner [Error] of a [CredentialError::Signing]. Panics if the
    /// error is of a different kind.
    pub fn signing_error(&self) -> &Error {
        match self {
            Self::Signing(e) => e,
            _ => panic!("error is not a Signing"),
        }
    }

    /// Descriptive message of the error, regardless of kind
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInputFormat(e)
            | Self::TypeValidation(e)
            | Self::SecurityPolicy(e)
            | Self::Signing(e) => &e.message,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::InvalidInputFormat(_) => "InvalidInputFormat",
            Self::TypeValidation(_) => "TypeValidation",
            Self::SecurityPolicy(_) => "SecurityPolicy",
            Self::Signing(_) => "Signing",
        }
    }
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message())
    }
}

impl std::error::Error for CredentialError {}

/// Return type of the fallible operations of this crate
pub type CredentialReturnType<T> = Result<T, Box<CredentialError>>;
