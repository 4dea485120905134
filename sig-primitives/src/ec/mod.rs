#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Elliptic Curve Cryptography
//!
//! ECDSA over NIST P-256 with SHA-256 digests.
//!
//! ## Unified API Design
//!
//! - `PrivKey` / `PubKey` capability traits, tagged by `SignatureScheme`
//! - Result-based error handling through `sig_prelude::SigError`
//! - Fixed-width padded encodings built by explicit helpers
//! - Zeroize for secret scalars

/// Capability traits shared by signature schemes
pub mod traits;

/// Fixed-width encoding helpers and SEC1 constants
pub mod encoding;

/// P-256 ECDSA operations
pub mod p256r1;

// Re-exports
pub use p256r1::*;

// Traits are always available
pub use traits::{PrivKey, PubKey, SignatureScheme};
