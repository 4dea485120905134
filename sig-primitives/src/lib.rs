#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # sig-p256r1 Primitives
//!
//! ECDSA over NIST P-256 ("R1", secp256r1) with SHA-256 message digests.
//!
//! ## Modules
//!
//! - **ec::p256r1**: keypair generation, signing, verification, public key
//!   derivation and SEC1 point encoding/decoding
//! - **ec::encoding**: fixed-width big-endian padding helpers and SEC1 constants
//! - **ec::traits**: the `PrivKey` / `PubKey` capability traits and the
//!   `SignatureScheme` tag
//! - **hash**: SHA-256 (FIPS 180-4)
//! - **rand**: random-source capability (OS generator, fixed-output source)
//! - **pct**: pairwise consistency test for freshly generated keypairs
//!
//! ## Wire Formats
//!
//! | Item | Length | Layout |
//! |------|--------|--------|
//! | Private key | 32 | big-endian scalar |
//! | Signature | 64 | `r` (32, right-justified) ‖ `s` (32, right-justified) |
//! | Compressed point | 33 | `0x02`/`0x03` ‖ `X` |
//! | Uncompressed point | 65 | `0x04` ‖ `X` ‖ `Y` |
//! | Point at infinity | 1 | `0x00` |
//!
//! ## Example
//!
//! ```rust
//! use sig_primitives::ec::p256r1::Keypair;
//!
//! let keypair = Keypair::generate()?;
//! let signature = keypair.private_key().sign(b"payload")?;
//! keypair.public_key().verify(b"payload", &signature)?;
//! # Ok::<(), sig_prelude::SigError>(())
//! ```

pub mod ec;
pub mod hash;
pub mod pct;
pub mod rand;

pub use ec::p256r1::{Keypair, PrivateKey, PublicKey};
pub use ec::traits::{PrivKey, PubKey, SignatureScheme};
