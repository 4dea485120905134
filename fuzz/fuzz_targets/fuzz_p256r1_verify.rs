#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for P-256 verification
//!
//! Arbitrary signature and public key bytes must never panic, and must map
//! onto exactly one of the documented error kinds.

use libfuzzer_sys::fuzz_target;
use sig_core::verify_p256r1;
use sig_prelude::SigError;
use sig_primitives::ec::p256r1::{Keypair, PublicKey, SIGNATURE_LEN};

fuzz_target!(|data: &[u8]| {
    // Test 1: fuzzed signature against a real key
    if let Ok(keypair) = Keypair::generate() {
        match keypair.public_key().verify(b"fuzz message", data) {
            Err(SigError::MalformedSignature { got, .. }) => {
                assert_eq!(got, data.len());
                assert_ne!(data.len(), SIGNATURE_LEN);
            }
            Err(SigError::SignatureInvalid) => assert_eq!(data.len(), SIGNATURE_LEN),
            Ok(()) => panic!("random bytes must not verify"),
            Err(other) => panic!("unexpected error kind: {other:?}"),
        }
    }

    // Test 2: split input into (public key, signature) for the byte-level API
    if data.len() > SIGNATURE_LEN {
        let (signature, public_key) = data.split_at(SIGNATURE_LEN);
        let result = verify_p256r1(b"fuzz message", signature, public_key);
        assert!(
            matches!(result, Err(SigError::InvalidPublicKey(_)) | Err(SigError::SignatureInvalid)),
            "unexpected result: {result:?}"
        );
    }

    // Test 3: raw coordinates
    if data.len() >= 2 {
        let (x, y) = data.split_at(data.len() / 2);
        let _ = PublicKey::new(x, y).verify(b"fuzz message", &[1u8; SIGNATURE_LEN]);
    }
});
