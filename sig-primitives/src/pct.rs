//! Pairwise Consistency Tests (PCT)
//!
//! A conditional self-test run right after key generation: sign a fixed
//! message with the new private key and verify it with the derived public
//! key. A keypair that fails must be discarded.
//!
//! ```rust
//! use sig_primitives::ec::p256r1::Keypair;
//! use sig_primitives::pct::pct_p256r1;
//!
//! let keypair = Keypair::generate()?;
//! pct_p256r1(&keypair)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::ec::p256r1::Keypair;
use crate::ec::traits::{PrivKey, PubKey};
use sig_prelude::error::SigError;
use thiserror::Error;
use tracing::debug;

/// Fixed test message for PCT operations
pub const PCT_TEST_MESSAGE: &[u8] = b"P-256 PCT test";

/// Error types for Pairwise Consistency Test operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PctError {
    /// Signing operation failed during PCT
    #[error("PCT signing failed: {0}")]
    SigningFailed(String),

    /// Verification could not run (unusable public key, malformed output)
    #[error("PCT verification failed: {0}")]
    VerificationFailed(String),

    /// The signature was rejected by the paired public key
    #[error("PCT failed: signature rejected - key pair is inconsistent")]
    KeyPairInconsistent,

    /// The two halves belong to different schemes
    #[error("PCT failed: scheme mismatch between public and private keys")]
    SchemeMismatch,
}

/// Result type for PCT operations
pub type PctResult<T> = Result<T, PctError>;

impl From<PctError> for SigError {
    fn from(err: PctError) -> Self {
        SigError::PairwiseConsistencyFailure(err.to_string())
    }
}

/// Run the sign/verify self-test on any private/public key pair
///
/// # Errors
///
/// Returns `PctError::SchemeMismatch` if the keys report different schemes,
/// `PctError::SigningFailed` if signing fails, `PctError::KeyPairInconsistent`
/// if the signature is rejected and `PctError::VerificationFailed` for any
/// other verification error.
pub fn pairwise_consistency_test<K: PrivKey>(
    private_key: &K,
    public_key: &K::PublicKey,
) -> PctResult<()> {
    if private_key.scheme() != public_key.scheme() {
        return Err(PctError::SchemeMismatch);
    }

    let signature = private_key
        .sign(PCT_TEST_MESSAGE)
        .map_err(|e| PctError::SigningFailed(e.to_string()))?;

    match public_key.verify(PCT_TEST_MESSAGE, &signature) {
        Ok(()) => {
            debug!(scheme = %private_key.scheme(), "pairwise consistency test passed");
            Ok(())
        }
        Err(SigError::SignatureInvalid) => Err(PctError::KeyPairInconsistent),
        Err(e) => Err(PctError::VerificationFailed(e.to_string())),
    }
}

/// Performs a Pairwise Consistency Test for a P-256 keypair
///
/// # Errors
///
/// Returns errors from [`pairwise_consistency_test`].
pub fn pct_p256r1(keypair: &Keypair) -> PctResult<()> {
    pairwise_consistency_test(keypair.private_key(), keypair.public_key())
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Tests use expect for simplicity
mod tests {
    use super::*;
    use crate::ec::p256r1::{PrivateKey, PublicKey};

    #[test]
    fn test_pct_p256r1_passes() {
        let keypair = Keypair::generate().expect("Key generation failed");
        assert!(pct_p256r1(&keypair).is_ok(), "PCT should pass for a fresh keypair");
    }

    #[test]
    fn test_pct_p256r1_mismatched_keys_fails() {
        let sk1 = PrivateKey::generate().expect("Key generation failed");
        let sk2 = PrivateKey::generate().expect("Key generation failed");

        // Public key from one keypair, private key from another
        let result = pairwise_consistency_test(&sk1, &sk2.public_key());
        assert_eq!(result, Err(PctError::KeyPairInconsistent));
    }

    #[test]
    fn test_pct_p256r1_unusable_public_key() {
        let sk = PrivateKey::generate().expect("Key generation failed");
        let result = pairwise_consistency_test(&sk, &PublicKey::infinity());
        assert!(matches!(result, Err(PctError::VerificationFailed(_))));
    }

    #[test]
    fn test_pct_error_converts_to_sig_error() {
        let err: SigError = PctError::KeyPairInconsistent.into();
        assert!(matches!(err, SigError::PairwiseConsistencyFailure(_)));
    }
}
