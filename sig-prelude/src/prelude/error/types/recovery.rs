//! Error Severity Classification
//!
//! Nothing in the workspace retries or recovers locally: every failure goes
//! straight back to the caller. These helpers only classify an error so the
//! caller can decide how loudly to report it.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use super::SigError;

/// Error severity level.
///
/// Used to classify errors by their impact on security and operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Low severity - caller supplied bad input.
    Low = 1,
    /// Medium severity - a signature or key was rejected.
    Medium = 2,
    /// High severity - an operation on valid input could not complete.
    High = 3,
    /// Critical severity - key material or entropy is unreliable.
    Critical = 4,
}

/// Get error severity for reporting.
#[must_use]
pub fn get_error_severity(error: &SigError) -> ErrorSeverity {
    match error {
        SigError::PairwiseConsistencyFailure(_) => ErrorSeverity::Critical,

        SigError::KeyGenerationError(_) | SigError::SigningError(_) => ErrorSeverity::High,

        SigError::SignatureInvalid | SigError::InvalidPublicKey(_) => ErrorSeverity::Medium,

        SigError::MalformedSignature { .. }
        | SigError::InvalidKeyLength { .. }
        | SigError::InvalidKey(_)
        | SigError::InvalidPoint(_)
        | SigError::InvalidConfiguration(_)
        | SigError::MessageTooLarge { .. } => ErrorSeverity::Low,
    }
}

/// Check if error requires immediate security response.
///
/// True for Critical and High severity errors.
#[must_use]
pub fn requires_security_response(error: &SigError) -> bool {
    matches!(get_error_severity(error), ErrorSeverity::Critical | ErrorSeverity::High)
}

/// True when verification rejected the signature, whether for its shape or
/// for its mathematics.
#[must_use]
pub fn is_verification_rejection(error: &SigError) -> bool {
    matches!(error, SigError::MalformedSignature { .. } | SigError::SignatureInvalid)
}

/// True when the error was caused by caller-supplied bytes rather than by the
/// scheme itself.
#[must_use]
pub fn is_input_error(error: &SigError) -> bool {
    get_error_severity(error) == ErrorSeverity::Low
}
