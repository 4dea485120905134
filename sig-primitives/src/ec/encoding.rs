#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Fixed-Width Big-Endian Encoding
//!
//! Curve coordinates and signature components are unsigned big-endian
//! integers whose natural byte length varies with their magnitude. Every
//! fixed-width slot they are written into is filled right-justified, with the
//! unused leading bytes zeroed.

use thiserror::Error;

/// Byte width of a P-256 field element or scalar
pub const FIELD_LEN: usize = 32;

/// Length of the SEC1 tag byte
pub const FLAG_LEN: usize = 1;

/// Length of the point-at-infinity encoding
pub const INFINITY_LEN: usize = 1;

/// Length of a compressed point encoding
pub const COMPRESSED_LEN: usize = FLAG_LEN + FIELD_LEN;

/// Length of an uncompressed point encoding
pub const UNCOMPRESSED_LEN: usize = FLAG_LEN + 2 * FIELD_LEN;

/// Tag byte of the point at infinity
pub const INFINITY_FLAG: u8 = 0x00;

/// Tag byte of a compressed point with even `Y`
pub const COMPRESSED_EVEN_FLAG: u8 = 0x02;

/// Tag byte of a compressed point with odd `Y`
pub const COMPRESSED_ODD_FLAG: u8 = 0x03;

/// Tag byte of an uncompressed point
pub const UNCOMPRESSED_FLAG: u8 = 0x04;

/// A value has more significant bytes than its target slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value needs {significant} significant bytes but the slot is {width} bytes wide")]
pub struct FieldOverflow {
    /// Slot width in bytes
    pub width: usize,
    /// Significant bytes in the value
    pub significant: usize,
}

/// Strip leading zero bytes, yielding the natural big-endian representation.
///
/// Zero maps to the empty slice.
#[must_use]
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes.get(start..).unwrap_or_default()
}

/// Write `value` right-justified into `slot`, zeroing the leading bytes.
///
/// Leading zero bytes of `value` do not count toward its width, so a
/// 33-byte input whose first byte is zero still fits a 32-byte slot.
///
/// # Errors
/// Returns [`FieldOverflow`] if the significant bytes of `value` do not fit;
/// `slot` is left untouched in that case.
pub fn write_right_justified(slot: &mut [u8], value: &[u8]) -> Result<(), FieldOverflow> {
    let significant = trim_leading_zeros(value);
    let offset = slot
        .len()
        .checked_sub(significant.len())
        .ok_or(FieldOverflow { width: slot.len(), significant: significant.len() })?;

    let (padding, digits) = slot.split_at_mut(offset);
    padding.fill(0);
    digits.copy_from_slice(significant);
    Ok(())
}

/// Left-pad `value` into a fresh `N`-byte array.
///
/// # Errors
/// Returns [`FieldOverflow`] if the significant bytes of `value` exceed `N`.
pub fn left_pad<const N: usize>(value: &[u8]) -> Result<[u8; N], FieldOverflow> {
    let mut out = [0u8; N];
    write_right_justified(&mut out, value)?;
    Ok(out)
}
