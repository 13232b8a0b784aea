#[cfg(test)]
mod when_signing_an_assertion {
    use std::time::{Duration, UNIX_EPOCH};

    use openssl::hash::MessageDigest;
    use sha2::{Digest, Sha256};

    use crate::credential::{JwtAssertionSigner, DEFAULT_ASSERTION_VALIDITY_SECS};
    use crate::helpers::decode_jwt;
    use crate::tests::helpers::{rsa_private_key, self_signed_certificate};

    fn frozen_clock() -> i64 {
        1_700_000_000
    }

    #[test]
    fn sets_the_registered_claims_from_the_clock() {
        let key = rsa_private_key(2048);
        let certificate = self_signed_certificate(&key);

        let mut signer = JwtAssertionSigner::new("client-1", "https://login.example.com/token");
        signer.now = frozen_clock;

        let token = signer.create_and_sign_jwt(&certificate, &key).unwrap();
        let decoded = decode_jwt(&token).unwrap();

        let issued = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let expires =
            issued + Duration::from_secs(DEFAULT_ASSERTION_VALIDITY_SECS as u64);

        assert_eq!(Some(issued), decoded.payload.issued_at());
        assert_eq!(Some(issued), decoded.payload.not_before());
        assert_eq!(Some(expires), decoded.payload.expires_at());
        assert_eq!(Some("client-1"), decoded.payload.issuer());
        assert_eq!(Some("client-1"), decoded.payload.subject());
        assert_eq!(
            Some(vec!["https://login.example.com/token"]),
            decoded.payload.audience()
        );
        assert!(decoded.payload.jwt_id().is_some());
    }

    #[test]
    fn honors_a_custom_validity_window() {
        let key = rsa_private_key(2048);
        let certificate = self_signed_certificate(&key);

        let mut signer = JwtAssertionSigner::new("client-1", "https://login.example.com/token")
            .with_validity(60);
        signer.now = frozen_clock;

        let token = signer.create_and_sign_jwt(&certificate, &key).unwrap();
        let decoded = decode_jwt(&token).unwrap();

        let issued = UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        assert_eq!(Some(issued + Duration::from_secs(60)), decoded.payload.expires_at());
    }

    #[test]
    fn sets_certificate_thumbprint_headers() {
        let key = rsa_private_key(2048);
        let certificate = self_signed_certificate(&key);

        let signer = JwtAssertionSigner::new("client-1", "https://login.example.com/token");

        let token = signer.create_and_sign_jwt(&certificate, &key).unwrap();
        let decoded = decode_jwt(&token).unwrap();

        let sha1 = certificate.digest(MessageDigest::sha1()).unwrap();
        let sha256 = Sha256::digest(certificate.to_der().unwrap());

        assert_eq!(Some("JWT"), decoded.header.token_type());
        assert_eq!(Some("RS256"), decoded.header.algorithm());
        assert_eq!(
            Some(sha1.to_vec()),
            decoded.header.x509_certificate_sha1_thumbprint()
        );
        assert_eq!(
            Some(sha256.to_vec()),
            decoded.header.x509_certificate_sha256_thumbprint()
        );
    }

    #[test]
    fn embeds_a_distinct_jti_per_invocation() {
        let key = rsa_private_key(2048);
        let certificate = self_signed_certificate(&key);

        let signer = JwtAssertionSigner::new("client-1", "https://login.example.com/token");

        let first = signer.create_and_sign_jwt(&certificate, &key).unwrap();
        let second = signer.create_and_sign_jwt(&certificate, &key).unwrap();

        let first_jti = decode_jwt(&first)
            .unwrap()
            .payload
            .jwt_id()
            .map(|j| j.to_string());
        let second_jti = decode_jwt(&second)
            .unwrap()
            .payload
            .jwt_id()
            .map(|j| j.to_string());

        assert_ne!(first_jti, second_jti);
    }
}

#[cfg(test)]
mod when_decoding_a_jwt {
    use crate::helpers::decode_jwt;

    #[test]
    fn rejects_tokens_without_three_components() {
        let err = decode_jwt("only.two").unwrap_err();

        assert!(err.is_type_validation());
        assert_eq!(
            "JWTs must have three components",
            err.type_validation_error().message
        );
    }

    #[test]
    fn rejects_encrypted_tokens() {
        let err = decode_jwt("a.b.c.d.e").unwrap_err();

        assert!(err.is_type_validation());
        assert_eq!(
            "encrypted JWTs cannot be decoded",
            err.type_validation_error().message
        );
    }
}
