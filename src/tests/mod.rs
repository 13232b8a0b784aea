


mod jwt_signer_tests;


#[cfg(test)]
pub mod helpers;
