//! sig-p256r1 Prelude Module
//!
//! Error handling shared by every crate in the workspace.
//!
//! - Result-based error handling throughout
//! - Zero unwrap/expect/panic in production code
//! - Distinct error kinds for malformed input and cryptographic rejection

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Error taxonomy and severity classification.
pub mod error;

// Re-export common error types
pub use error::{Result, SigError};

/// Library version.
///
/// Bumped whenever a wire format produced by the workspace changes.
pub const VERSION: u8 = 1;
