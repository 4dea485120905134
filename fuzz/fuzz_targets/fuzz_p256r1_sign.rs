#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for P-256 signing
//!
//! Any message signs and verifies; any 32-byte prefix either is a valid
//! scalar that round-trips or is rejected as a bad key.

use libfuzzer_sys::fuzz_target;
use sig_core::{derive_public_key_p256r1, sign_p256r1, verify_p256r1};
use sig_prelude::SigError;
use sig_primitives::ec::p256r1::Keypair;

fuzz_target!(|data: &[u8]| {
    // Test 1: fuzzed message
    if let Ok(keypair) = Keypair::generate() {
        if let Ok(signature) = keypair.private_key().sign(data) {
            assert_eq!(signature.len(), 64);
            assert!(keypair.public_key().verify(data, &signature).is_ok());

            let mut corrupted = signature;
            if let Some(byte) = corrupted.get_mut(17) {
                *byte ^= 0x01;
            }
            assert!(keypair.public_key().verify(data, &corrupted).is_err());
        }
    }

    // Test 2: fuzzed private key bytes
    if let Some(sk) = data.get(..32) {
        match sign_p256r1(b"fuzz", sk) {
            Ok(signature) => {
                let pk = derive_public_key_p256r1(sk).expect("valid key derives");
                assert!(verify_p256r1(b"fuzz", &signature, &pk).is_ok());
            }
            Err(SigError::InvalidKey(_)) => {}
            Err(other) => panic!("unexpected error kind: {other:?}"),
        }
    }
});
