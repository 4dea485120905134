//! Core Error Types for sig-p256r1
//!
//! This module defines the error type used throughout the workspace for
//! key generation, signing, verification and point encoding.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use thiserror::Error;

/// Error severity classification.
pub mod recovery;

/// Result type alias for sig-p256r1 operations
pub type Result<T> = std::result::Result<T, SigError>;

/// Error type for all sig-p256r1 operations
///
/// The four signature-scheme failure kinds (`KeyGenerationError`,
/// `SigningError`, `MalformedSignature`, `SignatureInvalid`) are kept distinct
/// so callers can tell malformed input apart from a cryptographic rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SigError {
    /// Key generation failed (entropy source or scalar sampling)
    #[error("Key generation error: {0}")]
    KeyGenerationError(String),

    /// Digital signature operation failed
    #[error("Signing error: {0}")]
    SigningError(String),

    /// Signature has the wrong byte length; no parsing was attempted
    #[error("Malformed signature: expected {expected} bytes, got {got}")]
    MalformedSignature {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Signature is well-formed but does not verify
    #[error("Signature verification failed")]
    SignatureInvalid,

    /// Invalid key length
    #[error("Invalid key length: expected {expected}, actual {actual}")]
    InvalidKeyLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Private key material is not a valid scalar
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Public key cannot be used for verification
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Point encoding or decoding failed
    #[error("Invalid elliptic curve point: {0}")]
    InvalidPoint(String),

    /// A freshly generated keypair failed its sign/verify self-check
    #[error("Pairwise consistency test failed: {0}")]
    PairwiseConsistencyFailure(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Message exceeds the configured size limit
    #[error("Message too large: {size} bytes (max {max} bytes)")]
    MessageTooLarge {
        /// Message length
        size: usize,
        /// Configured maximum
        max: usize,
    },
}

pub use recovery::{
    ErrorSeverity, get_error_severity, is_input_error, is_verification_rejection,
    requires_security_response,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;

    #[test]
    fn test_malformed_signature_display() {
        let err = SigError::MalformedSignature { expected: 64, got: 63 };
        assert_eq!(err.to_string(), "Malformed signature: expected 64 bytes, got 63");
    }

    #[test]
    fn test_signature_invalid_display() {
        assert_eq!(SigError::SignatureInvalid.to_string(), "Signature verification failed");
    }

    #[test]
    fn test_malformed_and_invalid_are_distinct() {
        let malformed = SigError::MalformedSignature { expected: 64, got: 65 };
        assert_ne!(malformed, SigError::SignatureInvalid);
    }

    #[test]
    fn test_error_serde_roundtrip() {
        let err = SigError::InvalidKeyLength { expected: 32, actual: 31 };
        let json = serde_json::to_string(&err).unwrap();
        let back: SigError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
