#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Random Sources
//!
//! Key generation and signing draw entropy from a caller-supplied
//! [`rand_core::CryptoRngCore`]. This module provides the default OS-backed
//! source and a fixed-output source for known-answer tests.

pub mod csprng;
pub mod fixed;

// Re-exports
pub use csprng::default_rng;
pub use fixed::FixedOutputRng;
