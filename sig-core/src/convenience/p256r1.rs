//! P-256 (R1) ECDSA operations on raw bytes
//!
//! Private keys travel as 32-byte big-endian scalars, public keys as SEC1
//! points (compressed or uncompressed) and signatures as 64-byte `r ‖ s`.

use crate::{
    log_crypto_operation_complete, log_crypto_operation_error, log_crypto_operation_start,
};
use tracing::debug;
use zeroize::Zeroizing;

use rand_core::CryptoRngCore;
use sig_prelude::error::{Result, SigError};
use sig_primitives::ec::p256r1::{Keypair, PRIVATE_KEY_LEN, PrivateKey, PublicKey, SIGNATURE_LEN};
use sig_primitives::pct::pct_p256r1;
use sig_primitives::rand::default_rng;

use crate::config::CoreConfig;
use crate::logging::sanitize_data;

/// Public key in SEC1 encoding plus the matching 32-byte private scalar
pub type EncodedKeypair = (Vec<u8>, Zeroizing<[u8; PRIVATE_KEY_LEN]>);

// ============================================================================
// Internal Implementation
// ============================================================================

pub(crate) fn generate_keypair_internal<R: CryptoRngCore>(
    rng: &mut R,
    config: &CoreConfig,
) -> Result<EncodedKeypair> {
    log_crypto_operation_start!(
        "p256r1_keygen",
        algorithm = "P256R1",
        pct = config.pairwise_consistency_test
    );

    let keypair = Keypair::generate_with_rng(rng).map_err(|err| {
        log_crypto_operation_error!("p256r1_keygen", err);
        err
    })?;

    if config.pairwise_consistency_test {
        pct_p256r1(&keypair).map_err(|e| {
            let err = SigError::from(e);
            log_crypto_operation_error!("p256r1_keygen", err);
            err
        })?;
    }

    let public_key = keypair.public_key().encode_point(config.compressed_public_keys).map_err(
        |err| {
            log_crypto_operation_error!("p256r1_keygen", err);
            err
        },
    )?;
    let private_key = keypair.private_key().to_bytes();

    log_crypto_operation_complete!(
        "p256r1_keygen",
        algorithm = "P256R1",
        public_key_len = public_key.len()
    );
    debug!(algorithm = "P256R1", "Generated P-256 keypair");

    Ok((public_key, private_key))
}

pub(crate) fn sign_internal(
    data: &[u8],
    private_key: &[u8],
    config: &CoreConfig,
) -> Result<Vec<u8>> {
    log_crypto_operation_start!("p256r1_sign", algorithm = "P256R1", data_len = data.len());

    let signature = config
        .check_message_size(data.len())
        .and_then(|()| PrivateKey::from_bytes(private_key))
        .and_then(|sk| sk.sign(data))
        .map_err(|err| {
            log_crypto_operation_error!("p256r1_sign", err, data_len = data.len());
            err
        })?;

    log_crypto_operation_complete!(
        "p256r1_sign",
        algorithm = "P256R1",
        signature_len = signature.len()
    );
    debug!(algorithm = "P256R1", message = %sanitize_data(data), "Created P-256 signature");

    Ok(signature.to_vec())
}

pub(crate) fn verify_internal(
    data: &[u8],
    signature: &[u8],
    public_key: &[u8],
    config: &CoreConfig,
) -> Result<()> {
    log_crypto_operation_start!("p256r1_verify", algorithm = "P256R1", data_len = data.len());

    let result = check_verify_inputs(data, signature, config)
        .and_then(|()| decode_public_key(public_key))
        .and_then(|pk| pk.verify(data, signature));

    match &result {
        Ok(()) => {
            log_crypto_operation_complete!("p256r1_verify", algorithm = "P256R1", valid = true);
            debug!(algorithm = "P256R1", valid = true, "P-256 verification completed");
        }
        Err(e) => {
            log_crypto_operation_error!("p256r1_verify", e);
        }
    }

    result
}

/// Length is checked before the public key is parsed, so a malformed
/// signature is always reported as such.
fn check_verify_inputs(data: &[u8], signature: &[u8], config: &CoreConfig) -> Result<()> {
    if signature.len() != SIGNATURE_LEN {
        return Err(SigError::MalformedSignature { expected: SIGNATURE_LEN, got: signature.len() });
    }
    config.check_message_size(data.len())
}

fn decode_public_key(encoded: &[u8]) -> Result<PublicKey> {
    PublicKey::decode_point(encoded).map_err(|e| match e {
        SigError::InvalidPoint(reason) => SigError::InvalidPublicKey(reason),
        other => other,
    })
}

pub(crate) fn derive_public_key_internal(private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
    log_crypto_operation_start!("p256r1_derive", algorithm = "P256R1");

    let encoded = PrivateKey::from_bytes(private_key)
        .and_then(|sk| sk.public_key().encode_point(compressed))
        .map_err(|err| {
            log_crypto_operation_error!("p256r1_derive", err);
            err
        })?;

    log_crypto_operation_complete!("p256r1_derive", algorithm = "P256R1", compressed = compressed);
    Ok(encoded)
}

pub(crate) fn encode_point_internal(x: &[u8], y: &[u8], compressed: bool) -> Result<Vec<u8>> {
    PublicKey::new(x, y).encode_point(compressed).map_err(|err| {
        log_crypto_operation_error!("p256r1_encode_point", err, x_len = x.len(), y_len = y.len());
        err
    })
}

// ============================================================================
// Public API
// ============================================================================

/// Generate a P-256 keypair using the default configuration.
///
/// Returns the uncompressed SEC1 public key and the 32-byte private scalar.
/// The keypair has passed the pairwise consistency test.
///
/// # Errors
///
/// Returns `SigError::KeyGenerationError` if the random source fails and
/// `SigError::PairwiseConsistencyFailure` if the self-test fails.
#[inline]
pub fn generate_keypair() -> Result<EncodedKeypair> {
    generate_keypair_internal(&mut default_rng(), &CoreConfig::default())
}

/// Generate a P-256 keypair with configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or as [`generate_keypair`].
#[inline]
pub fn generate_keypair_with_config(config: &CoreConfig) -> Result<EncodedKeypair> {
    config.validate()?;
    generate_keypair_internal(&mut default_rng(), config)
}

/// Generate a P-256 keypair from an injected random source.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or as [`generate_keypair`].
#[inline]
pub fn generate_keypair_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    config: &CoreConfig,
) -> Result<EncodedKeypair> {
    config.validate()?;
    generate_keypair_internal(rng, config)
}

/// Sign data with a 32-byte P-256 private key.
///
/// # Errors
///
/// Returns an error if:
/// - The private key is not 32 bytes (`InvalidKeyLength`) or not a valid
///   scalar (`InvalidKey`)
/// - Signing fails (`SigningError`)
#[inline]
pub fn sign_p256r1(data: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
    sign_internal(data, private_key, &CoreConfig::default())
}

/// Sign data with configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the message exceeds the
/// configured limit (`MessageTooLarge`), or as [`sign_p256r1`].
#[inline]
pub fn sign_p256r1_with_config(
    data: &[u8],
    private_key: &[u8],
    config: &CoreConfig,
) -> Result<Vec<u8>> {
    config.validate()?;
    sign_internal(data, private_key, config)
}

/// Verify a 64-byte signature against a SEC1-encoded public key.
///
/// # Errors
///
/// Returns an error if:
/// - The signature is not 64 bytes (`MalformedSignature`)
/// - The public key does not decode to a point on the curve (`InvalidPublicKey`)
/// - The signature does not verify (`SignatureInvalid`)
#[inline]
pub fn verify_p256r1(data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<()> {
    verify_internal(data, signature, public_key, &CoreConfig::default())
}

/// Verify a signature with configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the message exceeds the
/// configured limit (`MessageTooLarge`), or as [`verify_p256r1`].
#[inline]
pub fn verify_p256r1_with_config(
    data: &[u8],
    signature: &[u8],
    public_key: &[u8],
    config: &CoreConfig,
) -> Result<()> {
    config.validate()?;
    verify_internal(data, signature, public_key, config)
}

/// Derive the uncompressed SEC1 public key for a 32-byte private key.
///
/// # Errors
///
/// Returns `InvalidKeyLength` or `InvalidKey` for bad private key bytes.
#[inline]
pub fn derive_public_key_p256r1(private_key: &[u8]) -> Result<Vec<u8>> {
    derive_public_key_internal(private_key, false)
}

/// Derive the public key in the encoding chosen by the configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or as
/// [`derive_public_key_p256r1`].
#[inline]
pub fn derive_public_key_p256r1_with_config(
    private_key: &[u8],
    config: &CoreConfig,
) -> Result<Vec<u8>> {
    config.validate()?;
    derive_public_key_internal(private_key, config.compressed_public_keys)
}

/// Encode raw affine coordinates as a SEC1 point.
///
/// Both coordinates empty encode the point at infinity as `[0x00]`.
///
/// # Errors
///
/// Returns `InvalidPoint` if exactly one coordinate is empty or a coordinate
/// has more than 32 significant bytes.
#[inline]
pub fn encode_point_p256r1(x: &[u8], y: &[u8], compressed: bool) -> Result<Vec<u8>> {
    encode_point_internal(x, y, compressed)
}

/// Encode raw affine coordinates in the encoding chosen by the configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, or as
/// [`encode_point_p256r1`].
#[inline]
pub fn encode_point_p256r1_with_config(
    x: &[u8],
    y: &[u8],
    config: &CoreConfig,
) -> Result<Vec<u8>> {
    config.validate()?;
    encode_point_internal(x, y, config.compressed_public_keys)
}
