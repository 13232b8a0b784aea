use josekit::{jws::JwsHeader, jwt::JwtPayload};

/// # DecodedToken
/// A JWT split into its parts, without signature verification
#[derive(Debug)]
pub struct DecodedToken {
    /// Header of the JWT
    pub header: JwsHeader,
    /// Payload of the JWT
    pub payload: JwtPayload,
    /// Signature segment, still base64url encoded
    pub signature: String,
}

impl Default for DecodedToken {
    fn default() -> Self {
        Self {
            header: JwsHeader::new(),
            payload: Default::default(),
            signature: Default::default(),
        }
    }
}
