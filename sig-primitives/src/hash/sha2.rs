#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SHA-2 Hash Functions
//!
//! SHA-256 digest computed over every message before it is signed or verified.

use sha2::{Digest, Sha256};
use tracing::instrument;

/// Length of a SHA-256 digest in bytes
pub const SHA256_DIGEST_LEN: usize = 32;

/// SHA-256 hash function
#[must_use]
#[instrument(level = "trace", skip(data), fields(data_len = data.len()))]
pub fn sha256(data: &[u8]) -> [u8; SHA256_DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;

    #[test]
    fn test_sha256_abc() {
        let expected =
            hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
                .unwrap();
        assert_eq!(sha256(b"abc").to_vec(), expected);
    }

    #[test]
    fn test_sha256_empty() {
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(sha256(&[]).to_vec(), expected);
    }
}
