#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # sig-p256r1 Core
//!
//! Byte-level API for ECDSA over NIST P-256 with SHA-256.
//!
//! ## Modules
//!
//! - **convenience**: keypair generation, signing, verification, public key
//!   derivation and point encoding on raw bytes
//! - **config**: [`CoreConfig`] (keygen self-test, public key encoding,
//!   message size limit)
//! - **logging**: `tracing` subscriber setup, correlation IDs, payload
//!   sanitization and the `log_crypto_operation_*` macros
//!
//! ## Quick Start
//!
//! ```rust
//! use sig_core::{CoreConfig, generate_keypair_with_config, sign_p256r1, verify_p256r1};
//!
//! let config = CoreConfig::for_production().with_compressed_public_keys(true);
//! let (public_key, private_key) = generate_keypair_with_config(&config)?;
//! assert_eq!(public_key.len(), 33);
//!
//! let signature = sign_p256r1(b"payload", private_key.as_slice())?;
//! verify_p256r1(b"payload", &signature, &public_key)?;
//! # Ok::<(), sig_core::SigError>(())
//! ```

pub mod config;
pub mod convenience;
pub mod logging;

pub use sig_prelude::error;
pub use sig_prelude::error::{Result, SigError};

pub use config::CoreConfig;
pub use convenience::*;
pub use logging::{CorrelationGuard, init_tracing, sanitize_data};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
