//! # Helpers
//! Publicly exposed helper functions

use std::time::{SystemTime, UNIX_EPOCH};

use josekit::{jws::JwsHeader, jwt::JwtPayload};
use rand::Rng;
use serde_json::{Map, Value};
use url::Url;

use crate::types::{CredentialError, CredentialReturnType, DecodedToken};

/// Gets a Unix Timestamp in seconds. Uses [`SystemTime::now`]
pub fn now() -> i64 {
    let start = SystemTime::now();
    start
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as i64
}

/// Generates a random string using [rand::thread_rng]. You can pass in the bytes to generate
pub fn generate_random(bytes_to_generate: Option<u32>) -> String {
    let mut random_bytes = vec![];

    for _ in 0..bytes_to_generate.unwrap_or(32) {
        random_bytes.push(rand::thread_rng().gen());
    }

    base64_url::encode(&random_bytes)
}

/// Decodes a JWT without verification
pub fn decode_jwt(token: &str) -> CredentialReturnType<DecodedToken> {
    let split_token: Vec<&str> = token.split('.').collect();

    if split_token.len() == 5 {
        return Err(Box::new(CredentialError::new_type_validation(
            "encrypted JWTs cannot be decoded",
        )));
    }

    if split_token.len() != 3 {
        return Err(Box::new(CredentialError::new_type_validation(
            "JWTs must have three components",
        )));
    }

    let map_err_decode = |_| CredentialError::new_type_validation("JWT is malformed");
    let map_err_deserialize = |_| CredentialError::new_type_validation("JWT is malformed");
    let map_err_jose = |_| CredentialError::new_type_validation("JWT is malformed");

    let header_str = base64_url::decode(split_token[0]).map_err(map_err_decode)?;
    let payload_str = base64_url::decode(split_token[1]).map_err(map_err_decode)?;
    let signature = split_token[2].to_string();

    let header = serde_json::from_slice::<Map<String, Value>>(&header_str)
        .map(JwsHeader::from_map)
        .map_err(map_err_deserialize)?
        .map_err(map_err_jose)?;

    let payload = serde_json::from_slice::<Map<String, Value>>(&payload_str)
        .map(JwtPayload::from_map)
        .map_err(map_err_deserialize)?
        .map_err(map_err_jose)?;

    Ok(DecodedToken {
        header,
        payload,
        signature,
    })
}

pub(crate) fn validate_url(url: &str) -> CredentialReturnType<Url> {
    if let Ok(u) = Url::parse(url) {
        return Ok(u);
    }

    Err(Box::new(CredentialError::new_type_validation(
        "only valid absolute URLs can be requested",
    )))
}
