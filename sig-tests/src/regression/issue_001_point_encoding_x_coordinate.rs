//! Regression test for issue #001
//!
//! **Issue**: Every encoded point must carry a full-width `X` coordinate
//!
//! ## Edge Case
//!
//! Public key coordinates are held unpadded, so `X` can be shorter than 32
//! bytes. Both SEC1 forms must still place `X` in a fixed 32-byte slot right
//! after the tag: bytes 1..33 for compressed and uncompressed alike, with `Y`
//! in bytes 33..65 of the uncompressed form.
//!
//! ## Guarantee
//!
//! The output is sized exactly (33 or 65 bytes) before any coordinate is
//! written, and every coordinate goes through the right-justifying padding
//! helper.
//!
//! ## Test Strategy
//!
//! Encode known and random keys in both forms, check the exact layout and
//! decode the result back.
