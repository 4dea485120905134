#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Signature Scheme Capability Traits
//!
//! A registry of schemes dispatches on [`SignatureScheme`] and talks to keys
//! only through [`PrivKey`] and [`PubKey`]. P-256 is one implementation.

use sig_prelude::error::Result;
use std::fmt;

/// Closed set of signature schemes known to the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SignatureScheme {
    /// ECDSA over NIST P-256 with SHA-256
    P256R1,
}

impl SignatureScheme {
    /// Scheme identifier as used in logs and configuration
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SignatureScheme::P256R1 => "P256R1",
        }
    }

    /// Digest applied to messages before signing
    #[must_use]
    pub fn digest_name(&self) -> &'static str {
        match self {
            SignatureScheme::P256R1 => "SHA-256",
        }
    }

    /// Encoded signature length in bytes
    #[must_use]
    pub fn signature_len(&self) -> usize {
        match self {
            SignatureScheme::P256R1 => crate::ec::p256r1::SIGNATURE_LEN,
        }
    }

    /// Private key length in bytes
    #[must_use]
    pub fn private_key_len(&self) -> usize {
        match self {
            SignatureScheme::P256R1 => crate::ec::p256r1::PRIVATE_KEY_LEN,
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Private key capability
pub trait PrivKey: Send + Sync {
    /// Matching public key type
    type PublicKey: PubKey;

    /// Scheme this key belongs to
    fn scheme(&self) -> SignatureScheme;

    /// Sign a message with fresh entropy from the default random source
    ///
    /// # Errors
    /// Returns `SigError::SigningError` if signing fails.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// Derive the public key for this private key
    fn public_key(&self) -> Self::PublicKey;
}

/// Public key capability
pub trait PubKey: Send + Sync {
    /// Scheme this key belongs to
    fn scheme(&self) -> SignatureScheme;

    /// Verify a signature over a message
    ///
    /// # Errors
    /// Returns `SigError::MalformedSignature` for a signature of the wrong
    /// length and `SigError::SignatureInvalid` when verification fails.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()>;

    /// Strict structural equality
    fn equal_to(&self, other: &Self) -> bool
    where
        Self: Sized;

    /// Canonical point encoding
    ///
    /// # Errors
    /// Returns `SigError::InvalidPoint` if the key cannot be encoded.
    fn encode_point(&self, compressed: bool) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_metadata() {
        let scheme = SignatureScheme::P256R1;
        assert_eq!(scheme.to_string(), "P256R1");
        assert_eq!(scheme.digest_name(), "SHA-256");
        assert_eq!(scheme.signature_len(), 64);
        assert_eq!(scheme.private_key_len(), 32);
    }
}
