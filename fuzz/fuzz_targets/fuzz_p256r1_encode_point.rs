#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for SEC1 point encoding and decoding
//!
//! Encoding arbitrary coordinates never panics, never truncates and always
//! yields one of the three fixed lengths; decoding arbitrary bytes never
//! panics and every decoded point re-encodes to an accepted form.

use libfuzzer_sys::fuzz_target;
use sig_prelude::SigError;
use sig_primitives::ec::p256r1::PublicKey;

fuzz_target!(|data: &[u8]| {
    // Test 1: encode arbitrary coordinates
    if let Some((&split, rest)) = data.split_first() {
        let at = usize::from(split).min(rest.len());
        let (x, y) = rest.split_at(at);
        let key = PublicKey::new(x, y);

        for compressed in [true, false] {
            match key.encode_point(compressed) {
                Ok(encoded) => {
                    let expected = match (key.is_infinity(), compressed) {
                        (true, _) => 1,
                        (false, true) => 33,
                        (false, false) => 65,
                    };
                    assert_eq!(encoded.len(), expected);
                }
                Err(SigError::InvalidPoint(_)) => {}
                Err(other) => panic!("unexpected error kind: {other:?}"),
            }
        }
    }

    // Test 2: decode arbitrary bytes
    if let Ok(decoded) = PublicKey::decode_point(data) {
        let reencoded = decoded.encode_point(false).expect("decoded point re-encodes");
        assert_eq!(PublicKey::decode_point(&reencoded).ok(), Some(decoded));
    }
});
