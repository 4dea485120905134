//! Regression test for issue #003
//!
//! **Issue**: A public key with exactly one coordinate is never infinity
//!
//! ## Edge Case
//!
//! The point at infinity is represented by both coordinates being absent.
//! A key where only one of `X` or `Y` is absent is neither infinity nor a
//! curve point, and must not be quietly encoded as `[0x00]` or padded out
//! with a zero coordinate.
//!
//! ## Guarantee
//!
//! Infinity requires both coordinates to be absent. Exactly one absent
//! coordinate is a data-integrity error: `InvalidPoint` from encoding and
//! `InvalidPublicKey` from verification.
//!
//! ## Test Strategy
//!
//! Build both half-present variants of a real key and exercise every
//! operation that reads coordinates.

#[cfg(test)]
mod tests {
    use sig_prelude::SigError;
    use sig_primitives::ec::p256r1::PublicKey;

    use crate::utils::test_keypair;

    #[test]
    fn regression_issue_003_encode_rejects_half_present() {
        let keypair = test_keypair();
        let variants = [
            PublicKey::new(Vec::new(), keypair.public_key().y().to_vec()),
            PublicKey::new(keypair.public_key().x().to_vec(), Vec::new()),
        ];

        for key in &variants {
            assert!(!key.is_infinity());
            for compressed in [true, false] {
                assert!(matches!(key.encode_point(compressed), Err(SigError::InvalidPoint(_))));
            }
        }
    }

    #[test]
    fn regression_issue_003_verify_rejects_half_present() {
        let keypair = test_keypair();
        let signature = keypair.private_key().sign(b"issue 003").expect("signing should succeed");
        let key = PublicKey::new(Vec::new(), keypair.public_key().y().to_vec());

        assert!(matches!(key.verify(b"issue 003", &signature), Err(SigError::InvalidPublicKey(_))));
    }

    #[test]
    fn regression_issue_003_true_infinity_still_encodes() {
        let infinity = PublicKey::infinity();
        assert_eq!(infinity.encode_point(true).expect("infinity encodes"), vec![0x00]);
        assert_eq!(infinity.encode_point(false).expect("infinity encodes"), vec![0x00]);
    }
}
