//! Regression test for issue #002
//!
//! **Issue**: Signatures with a short `r` or `s` must still verify
//!
//! ## Edge Case
//!
//! About 1 in 256 signatures has an `r` (or `s`) whose big-endian form has a
//! leading zero byte, so its minimal encoding is under 32 bytes. Laying such
//! a value out at its natural length would shift every following byte.
//!
//! ## Guarantee
//!
//! Each component is right-justified in its own 32-byte half with the
//! leading bytes zeroed.
//!
//! ## Test Strategy
//!
//! Sign until a signature with a leading zero in `r` and one with a leading
//! zero in `s` turn up, then verify both.
