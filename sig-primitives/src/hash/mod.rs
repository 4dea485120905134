#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Hash Functions
//!
//! SHA-256 message digests used by the signature scheme.

pub mod sha2;

pub use self::sha2::{SHA256_DIGEST_LEN, sha256};
