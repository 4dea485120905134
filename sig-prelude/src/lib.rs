//! sig-p256r1 Prelude Crate
//!
//! Common types used throughout the sig-p256r1 signature workspace.
//!
//! # Overview
//!
//! The prelude crate is the foundation for error handling across all
//! workspace components: the P-256 primitives, the convenience API and the
//! test suites all report failures through [`SigError`].
//!
//! # Example
//!
//! ```rust
//! use sig_prelude::prelude::{SigError, Result};
//!
//! fn example_operation(signature: &[u8]) -> Result<()> {
//!     if signature.len() != 64 {
//!         return Err(SigError::MalformedSignature { expected: 64, got: signature.len() });
//!     }
//!     Ok(())
//! }
//!
//! assert!(example_operation(&[0u8; 63]).is_err());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Prelude module containing all commonly used types.
pub mod prelude;

pub use prelude::*;
