use super::grant_type;

/// # AssertionType
/// The declared representation type of a pre obtained assertion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssertionType {
    /// JWT bearer assertion (RFC 7523). Currently the only supported type.
    #[default]
    JwtBearer,
}

impl AssertionType {
    /// The grant type urn this assertion type is presented under
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JwtBearer => grant_type::JWT_BEARER,
        }
    }
}
