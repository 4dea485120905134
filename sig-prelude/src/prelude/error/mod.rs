//! Error Handling Module
//!
//! Error types and severity classification for the sig-p256r1 workspace.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Core error types and result handling.
pub mod types;

pub use types::{
    ErrorSeverity, Result, SigError, get_error_severity, is_input_error,
    is_verification_rejection, requires_security_response,
};
