//! Convenience API for P-256 signatures
//!
//! Byte-in, byte-out wrappers around `sig-primitives` with configuration,
//! the keygen self-test and structured logging applied uniformly.
//!
//! ```rust
//! use sig_core::{generate_keypair, sign_p256r1, verify_p256r1};
//!
//! let (public_key, private_key) = generate_keypair()?;
//! let signature = sign_p256r1(b"message", private_key.as_slice())?;
//! verify_p256r1(b"message", &signature, &public_key)?;
//! # Ok::<(), sig_core::SigError>(())
//! ```

pub(crate) mod p256r1;

pub use p256r1::{
    EncodedKeypair, derive_public_key_p256r1, derive_public_key_p256r1_with_config,
    encode_point_p256r1, encode_point_p256r1_with_config, generate_keypair,
    generate_keypair_with_config, generate_keypair_with_rng, sign_p256r1, sign_p256r1_with_config,
    verify_p256r1, verify_p256r1_with_config,
};
