//! # Types Module
//! All the types, errors and shared contracts are in this module

mod assertion_type;
mod decoded_token;
mod errors;
mod grant_type;
mod request_params;

pub use assertion_type::AssertionType;
pub use decoded_token::DecodedToken;
pub use errors::{CredentialError, CredentialReturnType, Error};
pub use grant_type::JWT_BEARER;
pub use request_params::RequestParameterSource;
