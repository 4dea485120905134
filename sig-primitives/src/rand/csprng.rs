#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Cryptographically Secure Random Number Generator
//!
//! The process-wide default source is the operating system generator. `OsRng`
//! is a zero-sized handle, so every caller (and every thread) gets its own.

use rand::rngs::OsRng;

/// Default random source used when the caller does not inject one
#[must_use]
pub fn default_rng() -> OsRng {
    OsRng
}
