#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # P-256 (R1) ECDSA
//!
//! ECDSA over NIST P-256 using the `p256` crate, with SHA-256 as the message
//! digest. Signatures are the raw 64-byte `r ‖ s` form and public keys are
//! held as unpadded big-endian affine coordinates.
//!
//! Every signature mixes 32 bytes of fresh entropy from the caller's random
//! source into the RFC 6979 nonce derivation, so no two signing calls share a
//! nonce even for identical messages.

use super::encoding::{
    COMPRESSED_EVEN_FLAG, COMPRESSED_LEN, COMPRESSED_ODD_FLAG, FIELD_LEN, INFINITY_FLAG,
    INFINITY_LEN, UNCOMPRESSED_FLAG, UNCOMPRESSED_LEN, left_pad, trim_leading_zeros,
    write_right_justified,
};
use super::traits::{PrivKey, PubKey, SignatureScheme};
use crate::hash::sha256;
use crate::rand::default_rng;
use p256::{
    EncodedPoint, FieldBytes, SecretKey,
    ecdsa::{
        Signature, SigningKey, VerifyingKey,
        signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner},
    },
    elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
};
use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};
use rand_core::CryptoRngCore;
use sig_prelude::error::{Result, SigError};
use std::fmt;
use subtle::{Choice, ConstantTimeEq};
use tracing::trace;
use zeroize::Zeroizing;

/// Private key length in bytes
pub const PRIVATE_KEY_LEN: usize = 32;

/// Width of one affine coordinate in bytes
pub const COORDINATE_LEN: usize = FIELD_LEN;

/// Length of the `r` component of a signature
pub const SIGNATURE_R_LEN: usize = 32;

/// Length of the `s` component of a signature
pub const SIGNATURE_S_LEN: usize = 32;

/// Signature length in bytes
pub const SIGNATURE_LEN: usize = SIGNATURE_R_LEN + SIGNATURE_S_LEN;

/// Upper bound on entropy draws while sampling a private scalar.
///
/// A uniformly random 32-byte string is rejected with probability below
/// 2^-32, so hitting this bound means the random source is broken.
pub const KEYGEN_MAX_ATTEMPTS: usize = 64;

/// Bytes of fresh entropy mixed into every nonce
const NONCE_ENTROPY_LEN: usize = 32;

/// P-256 private key
///
/// Holds a scalar `D` with `0 < D < n`; the invariant is checked on every
/// construction path, so no operation on an existing key needs to recheck it.
/// The scalar is zeroized on drop and never printed.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
}

impl PrivateKey {
    /// Generate a private key from the default OS random source
    ///
    /// # Errors
    /// Returns `SigError::KeyGenerationError` if the random source fails.
    pub fn generate() -> Result<Self> {
        Self::generate_with_rng(&mut default_rng())
    }

    /// Generate a private key from an injected random source
    ///
    /// Candidates are drawn 32 bytes at a time and accepted iff they lie in
    /// `[1, n-1]`, which keeps the result uniform over the scalar range.
    ///
    /// # Errors
    /// Returns `SigError::KeyGenerationError` if the source reports a failure
    /// or yields no valid scalar within [`KEYGEN_MAX_ATTEMPTS`] draws.
    pub fn generate_with_rng<R: CryptoRngCore>(rng: &mut R) -> Result<Self> {
        let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);

        for attempt in 0..KEYGEN_MAX_ATTEMPTS {
            rng.try_fill_bytes(candidate.as_mut_slice()).map_err(|e| {
                SigError::KeyGenerationError(format!("random source failed: {e}"))
            })?;

            if let Ok(secret) = SecretKey::from_slice(candidate.as_slice()) {
                return Ok(Self { secret });
            }
            trace!(attempt, "rejected out-of-range P-256 scalar candidate");
        }

        Err(SigError::KeyGenerationError(format!(
            "no valid P-256 scalar after {KEYGEN_MAX_ATTEMPTS} draws"
        )))
    }

    /// Import a 32-byte big-endian scalar
    ///
    /// # Errors
    /// Returns `SigError::InvalidKeyLength` for the wrong length and
    /// `SigError::InvalidKey` if the scalar is zero or not below the order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(SigError::InvalidKeyLength {
                expected: PRIVATE_KEY_LEN,
                actual: bytes.len(),
            });
        }

        let secret = SecretKey::from_slice(bytes).map_err(|_e| {
            SigError::InvalidKey("scalar must satisfy 0 < D < n".to_string())
        })?;

        Ok(Self { secret })
    }

    /// Export the scalar as 32 big-endian bytes
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_LEN]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        out.copy_from_slice(&self.secret.to_bytes());
        out
    }

    /// Derive the public key `D·G`
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_curve_key(&self.secret.public_key())
    }

    /// Sign with fresh entropy from the default OS random source
    ///
    /// # Errors
    /// Returns `SigError::SigningError` if signing fails.
    pub fn sign(&self, message: &[u8]) -> Result<[u8; SIGNATURE_LEN]> {
        self.sign_with_rng(message, &mut default_rng())
    }

    /// Sign `SHA256(message)` with nonce entropy from an injected source
    ///
    /// Output is `r ‖ s`, each right-justified in its 32-byte half.
    ///
    /// # Errors
    /// Returns `SigError::SigningError` if the random source fails or the
    /// ECDSA primitive reports an error.
    pub fn sign_with_rng<R: CryptoRngCore>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> Result<[u8; SIGNATURE_LEN]> {
        let digest = sha256(message);

        let mut entropy = Zeroizing::new([0u8; NONCE_ENTROPY_LEN]);
        rng.try_fill_bytes(entropy.as_mut_slice())
            .map_err(|e| SigError::SigningError(format!("random source failed: {e}")))?;
        let mut nonce_rng = ChaCha20Rng::from_seed(*entropy);

        let signing_key = SigningKey::from(&self.secret);
        let signature: Signature = signing_key
            .sign_prehash_with_rng(&mut nonce_rng, &digest)
            .map_err(|e| SigError::SigningError(e.to_string()))?;

        encode_signature(&signature)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").field("d", &"[REDACTED]").finish()
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().as_slice().ct_eq(other.to_bytes().as_slice())
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKey {}

impl PrivKey for PrivateKey {
    type PublicKey = PublicKey;

    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::P256R1
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        PrivateKey::sign(self, message).map(|sig| sig.to_vec())
    }

    fn public_key(&self) -> PublicKey {
        PrivateKey::public_key(self)
    }
}

/// Lay out `r` and `s` right-justified in their 32-byte halves.
fn encode_signature(signature: &Signature) -> Result<[u8; SIGNATURE_LEN]> {
    let (r, s) = signature.split_bytes();

    let mut out = [0u8; SIGNATURE_LEN];
    let (r_slot, s_slot) = out.split_at_mut(SIGNATURE_R_LEN);
    write_right_justified(r_slot, trim_leading_zeros(&r))
        .map_err(|e| SigError::SigningError(format!("r component: {e}")))?;
    write_right_justified(s_slot, trim_leading_zeros(&s))
        .map_err(|e| SigError::SigningError(format!("s component: {e}")))?;

    Ok(out)
}

/// P-256 public key as affine coordinates
///
/// `x` and `y` are unsigned big-endian integers without forced padding; they
/// are only widened to the 32-byte field width when encoded. Both coordinates
/// empty denotes the point at infinity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PublicKey {
    x: Vec<u8>,
    y: Vec<u8>,
}

impl PublicKey {
    /// Build a public key from raw coordinate bytes, stored as given
    #[must_use]
    pub fn new(x: impl Into<Vec<u8>>, y: impl Into<Vec<u8>>) -> Self {
        Self { x: x.into(), y: y.into() }
    }

    /// The point at infinity
    #[must_use]
    pub fn infinity() -> Self {
        Self::default()
    }

    fn from_curve_key(key: &p256::PublicKey) -> Self {
        let point = key.to_encoded_point(false);
        match (point.x(), point.y()) {
            (Some(x), Some(y)) => {
                Self { x: trim_leading_zeros(x).to_vec(), y: trim_leading_zeros(y).to_vec() }
            }
            _ => Self::infinity(),
        }
    }

    /// `X` coordinate bytes (empty when absent)
    #[must_use]
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    /// `Y` coordinate bytes (empty when absent)
    #[must_use]
    pub fn y(&self) -> &[u8] {
        &self.y
    }

    /// True when both coordinates are absent
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }

    /// Check that exactly zero or two coordinates are present
    fn check_coordinates(&self) -> Result<()> {
        if self.x.is_empty() != self.y.is_empty() {
            return Err(SigError::InvalidPoint(
                "exactly one coordinate is absent; expected both or neither".to_string(),
            ));
        }
        Ok(())
    }

    fn padded_coordinates(&self) -> Result<([u8; FIELD_LEN], [u8; FIELD_LEN])> {
        let x = left_pad::<FIELD_LEN>(&self.x)
            .map_err(|e| SigError::InvalidPoint(format!("X coordinate: {e}")))?;
        let y = left_pad::<FIELD_LEN>(&self.y)
            .map_err(|e| SigError::InvalidPoint(format!("Y coordinate: {e}")))?;
        Ok((x, y))
    }

    fn to_verifying_key(&self) -> Result<VerifyingKey> {
        self.check_coordinates().map_err(|e| SigError::InvalidPublicKey(e.to_string()))?;
        if self.is_infinity() {
            return Err(SigError::InvalidPublicKey("point at infinity".to_string()));
        }

        let (x, y) =
            self.padded_coordinates().map_err(|e| SigError::InvalidPublicKey(e.to_string()))?;
        let point =
            EncodedPoint::from_affine_coordinates(&FieldBytes::from(x), &FieldBytes::from(y), false);

        VerifyingKey::from_encoded_point(&point)
            .map_err(|_e| SigError::InvalidPublicKey("point is not on the P-256 curve".to_string()))
    }

    /// Verify a 64-byte `r ‖ s` signature over `SHA256(message)`
    ///
    /// # Errors
    /// - `SigError::MalformedSignature` if `signature` is not 64 bytes; this
    ///   is checked before anything is parsed
    /// - `SigError::InvalidPublicKey` if this key is infinity, half-present
    ///   or off the curve
    /// - `SigError::SignatureInvalid` if the signature does not verify
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        if signature.len() != SIGNATURE_LEN {
            return Err(SigError::MalformedSignature {
                expected: SIGNATURE_LEN,
                got: signature.len(),
            });
        }

        let verifying_key = self.to_verifying_key()?;

        let (r_bytes, s_bytes) = signature.split_at(SIGNATURE_R_LEN);
        let r = left_pad::<SIGNATURE_R_LEN>(r_bytes).map_err(|_e| SigError::SignatureInvalid)?;
        let s = left_pad::<SIGNATURE_S_LEN>(s_bytes).map_err(|_e| SigError::SignatureInvalid)?;

        // r or s of zero, or not below the order, can never verify
        let signature = Signature::from_scalars(FieldBytes::from(r), FieldBytes::from(s))
            .map_err(|_e| SigError::SignatureInvalid)?;

        let digest = sha256(message);
        verifying_key.verify_prehash(&digest, &signature).map_err(|_e| SigError::SignatureInvalid)
    }

    /// Encode as a SEC1 point
    ///
    /// - infinity: `[0x00]`, whatever `compressed` says
    /// - compressed: `0x02`/`0x03` (parity of `Y`) ‖ `X` padded to 32 bytes
    /// - uncompressed: `0x04` ‖ `X` ‖ `Y`, each padded to 32 bytes
    ///
    /// # Errors
    /// Returns `SigError::InvalidPoint` if exactly one coordinate is absent or
    /// a coordinate has more than 32 significant bytes.
    pub fn encode_point(&self, compressed: bool) -> Result<Vec<u8>> {
        self.check_coordinates()?;
        if self.is_infinity() {
            return Ok(vec![INFINITY_FLAG; INFINITY_LEN]);
        }

        let (x, y) = self.padded_coordinates()?;

        if compressed {
            let y_is_odd = self.y.last().is_some_and(|b| b & 1 == 1);
            let flag = if y_is_odd { COMPRESSED_ODD_FLAG } else { COMPRESSED_EVEN_FLAG };

            let mut encoded = Vec::with_capacity(COMPRESSED_LEN);
            encoded.push(flag);
            encoded.extend_from_slice(&x);
            Ok(encoded)
        } else {
            let mut encoded = Vec::with_capacity(UNCOMPRESSED_LEN);
            encoded.push(UNCOMPRESSED_FLAG);
            encoded.extend_from_slice(&x);
            encoded.extend_from_slice(&y);
            Ok(encoded)
        }
    }

    /// Decode a SEC1 point (compressed, uncompressed or `[0x00]` infinity)
    ///
    /// Compressed input is decompressed, so the result always carries both
    /// coordinates in their natural unpadded form.
    ///
    /// # Errors
    /// Returns `SigError::InvalidPoint` for malformed encodings, for any tag
    /// other than `0x00`, `0x02`, `0x03` or `0x04`, and for points that are
    /// not on the curve.
    pub fn decode_point(encoded: &[u8]) -> Result<Self> {
        match encoded.first() {
            Some(&INFINITY_FLAG) if encoded.len() == INFINITY_LEN => return Ok(Self::infinity()),
            Some(&(COMPRESSED_EVEN_FLAG | COMPRESSED_ODD_FLAG | UNCOMPRESSED_FLAG)) => {}
            Some(tag) => {
                return Err(SigError::InvalidPoint(format!("unsupported SEC1 tag {tag:#04x}")));
            }
            None => return Err(SigError::InvalidPoint("empty encoding".to_string())),
        }

        let point = EncodedPoint::from_bytes(encoded)
            .map_err(|e| SigError::InvalidPoint(format!("malformed SEC1 encoding: {e}")))?;

        let key: Option<p256::PublicKey> = p256::PublicKey::from_encoded_point(&point).into();
        key.map(|k| Self::from_curve_key(&k))
            .ok_or_else(|| SigError::InvalidPoint("point is not on the P-256 curve".to_string()))
    }
}

impl PubKey for PublicKey {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::P256R1
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        PublicKey::verify(self, message, signature)
    }

    fn equal_to(&self, other: &Self) -> bool {
        self == other
    }

    fn encode_point(&self, compressed: bool) -> Result<Vec<u8>> {
        PublicKey::encode_point(self, compressed)
    }
}

/// P-256 keypair
///
/// The private key is the source of truth; the public key is derived from it
/// once at construction.
#[derive(Debug, Clone)]
pub struct Keypair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl Keypair {
    /// Generate a keypair from the default OS random source
    ///
    /// # Errors
    /// Returns `SigError::KeyGenerationError` if the random source fails.
    pub fn generate() -> Result<Self> {
        Self::generate_with_rng(&mut default_rng())
    }

    /// Generate a keypair from an injected random source
    ///
    /// # Errors
    /// Returns `SigError::KeyGenerationError` if the random source fails.
    pub fn generate_with_rng<R: CryptoRngCore>(rng: &mut R) -> Result<Self> {
        Ok(Self::from_private_key(PrivateKey::generate_with_rng(rng)?))
    }

    /// Bind a private key to its derived public key
    #[must_use]
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self { private_key, public_key }
    }

    /// Private half
    #[must_use]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Public half
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Split into `(private, public)`
    #[must_use]
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private_key, self.public_key)
    }

    /// Scheme of both halves
    #[must_use]
    pub fn scheme(&self) -> SignatureScheme {
        SignatureScheme::P256R1
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)] // Tests use assertions for verification
#[allow(clippy::indexing_slicing)] // Tests use direct indexing
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;
    use crate::rand::FixedOutputRng;
    use sig_prelude::error::Result;

    // RFC 6979 A.2.5 P-256 key
    const RFC6979_D: &str = "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";
    const RFC6979_UX: &str = "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6";
    const RFC6979_UY: &str = "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";

    #[test]
    fn test_p256r1_keypair_generation() -> Result<()> {
        let keypair = Keypair::generate()?;
        assert_eq!(keypair.private_key().to_bytes().len(), PRIVATE_KEY_LEN);
        assert!(!keypair.public_key().is_infinity());
        Ok(())
    }

    #[test]
    fn test_p256r1_derive_known_answer() -> Result<()> {
        let sk = PrivateKey::from_bytes(&hex::decode(RFC6979_D).unwrap())?;
        let pk = sk.public_key();
        assert_eq!(hex::encode(pk.x()), RFC6979_UX);
        assert_eq!(hex::encode(pk.y()), RFC6979_UY);
        Ok(())
    }

    #[test]
    fn test_p256r1_sign_verify() -> Result<()> {
        let keypair = Keypair::generate()?;
        let message = b"Hello, P-256!";
        let signature = keypair.private_key().sign(message)?;
        assert_eq!(signature.len(), SIGNATURE_LEN);

        keypair.public_key().verify(message, &signature)?;
        assert_eq!(
            keypair.public_key().verify(b"Wrong message", &signature),
            Err(SigError::SignatureInvalid)
        );
        Ok(())
    }

    #[test]
    fn test_p256r1_fixed_rng_signing_is_reproducible() -> Result<()> {
        let sk = PrivateKey::from_bytes(&hex::decode(RFC6979_D).unwrap())?;
        let first = sk.sign_with_rng(b"sample", &mut FixedOutputRng::new([0x42; 32]))?;
        let second = sk.sign_with_rng(b"sample", &mut FixedOutputRng::new([0x42; 32]))?;
        assert_eq!(first, second);

        let other = sk.sign_with_rng(b"sample", &mut FixedOutputRng::new([0x43; 32]))?;
        assert_ne!(first, other);
        sk.public_key().verify(b"sample", &other)?;
        Ok(())
    }

    #[test]
    fn test_p256r1_private_key_debug_is_redacted() -> Result<()> {
        let sk = PrivateKey::from_bytes(&hex::decode(RFC6979_D).unwrap())?;
        let debug = format!("{sk:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.to_lowercase().contains("c9afa9"));
        Ok(())
    }

    #[test]
    fn test_p256r1_private_key_roundtrip() -> Result<()> {
        let original = PrivateKey::generate()?;
        let restored = PrivateKey::from_bytes(original.to_bytes().as_slice())?;
        assert_eq!(original, restored);
        assert_eq!(original.public_key(), restored.public_key());
        Ok(())
    }

    #[test]
    fn test_p256r1_encode_known_point() -> Result<()> {
        let pk = PublicKey::new(hex::decode(RFC6979_UX).unwrap(), hex::decode(RFC6979_UY).unwrap());

        let compressed = pk.encode_point(true)?;
        assert_eq!(compressed.len(), 33);
        // Uy ends in 0x99, which is odd
        assert_eq!(compressed[0], COMPRESSED_ODD_FLAG);
        assert_eq!(hex::encode(&compressed[1..]), RFC6979_UX);

        let uncompressed = pk.encode_point(false)?;
        assert_eq!(uncompressed.len(), 65);
        assert_eq!(uncompressed[0], UNCOMPRESSED_FLAG);
        assert_eq!(hex::encode(&uncompressed[1..33]), RFC6979_UX);
        assert_eq!(hex::encode(&uncompressed[33..]), RFC6979_UY);
        Ok(())
    }

    #[test]
    fn test_p256r1_decode_compressed_recovers_y() -> Result<()> {
        let keypair = Keypair::generate()?;
        let compressed = keypair.public_key().encode_point(true)?;
        let decoded = PublicKey::decode_point(&compressed)?;
        assert_eq!(&decoded, keypair.public_key());
        Ok(())
    }

    #[test]
    fn test_p256r1_trait_dispatch() -> Result<()> {
        fn sign_and_check<K: PrivKey>(sk: &K) -> Result<()> {
            let signature = sk.sign(b"via trait")?;
            sk.public_key().verify(b"via trait", &signature)
        }

        let sk = PrivateKey::generate()?;
        assert_eq!(PrivKey::scheme(&sk), SignatureScheme::P256R1);
        sign_and_check(&sk)?;
        assert!(PubKey::equal_to(&sk.public_key(), &PrivKey::public_key(&sk)));
        Ok(())
    }
}
