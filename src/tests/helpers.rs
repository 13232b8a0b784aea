use openssl::asn1::Asn1Time;
use openssl::bn::{BigNum, MsbOption};
use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;
use openssl::x509::{X509NameBuilder, X509};

use crate::authority::Authority;
use crate::credential::CredentialBundle;

pub(crate) const TEST_PASSPHRASE: &str = "test-passphrase";

pub(crate) fn test_authority() -> Authority {
    Authority::new("https://login.example.com/token").unwrap()
}

pub(crate) fn rsa_private_key(bits: u32) -> PKey<Private> {
    let rsa = Rsa::generate(bits).unwrap();
    PKey::from_rsa(rsa).unwrap()
}

pub(crate) fn ec_private_key() -> PKey<Private> {
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1).unwrap();
    let ec = EcKey::generate(&group).unwrap();
    PKey::from_ec_key(ec).unwrap()
}

pub(crate) fn self_signed_certificate(key: &PKey<Private>) -> X509 {
    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("CN", "oauth-assertion-tests")
        .unwrap();
    let name = name.build();

    let mut serial = BigNum::new().unwrap();
    serial.rand(159, MsbOption::MAYBE_ZERO, false).unwrap();

    let mut builder = X509::builder().unwrap();
    builder.set_version(2).unwrap();
    builder
        .set_serial_number(&serial.to_asn1_integer().unwrap())
        .unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(key).unwrap();
    builder
        .set_not_before(&Asn1Time::days_from_now(0).unwrap())
        .unwrap();
    builder
        .set_not_after(&Asn1Time::days_from_now(1).unwrap())
        .unwrap();
    builder.sign(key, MessageDigest::sha256()).unwrap();

    builder.build()
}

pub(crate) fn rsa_bundle(bits: u32) -> CredentialBundle {
    let key = rsa_private_key(bits);
    let certificate = self_signed_certificate(&key);

    CredentialBundle::new(certificate, key)
}

pub(crate) fn ec_bundle() -> CredentialBundle {
    let key = ec_private_key();
    let certificate = self_signed_certificate(&key);

    CredentialBundle::new(certificate, key)
}

pub(crate) fn certificate_only_pkcs12_der() -> Vec<u8> {
    let key = rsa_private_key(2048);
    let certificate = self_signed_certificate(&key);

    let pkcs12 = Pkcs12::builder()
        .name("oauth-assertion-tests")
        .cert(&certificate)
        .build2(TEST_PASSPHRASE)
        .unwrap();

    pkcs12.to_der().unwrap()
}

pub(crate) fn pkcs12_der(bits: u32) -> Vec<u8> {
    let key = rsa_private_key(bits);
    let certificate = self_signed_certificate(&key);

    let pkcs12 = Pkcs12::builder()
        .name("oauth-assertion-tests")
        .pkey(&key)
        .cert(&certificate)
        .build2(TEST_PASSPHRASE)
        .unwrap();

    pkcs12.to_der().unwrap()
}
