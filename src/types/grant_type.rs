/// JWT bearer grant type urn (RFC 7523)
pub const JWT_BEARER: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
