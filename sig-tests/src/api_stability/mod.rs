//! API Stability Tests
//!
//! Pins the wire formats, public constants and error variants that callers
//! depend on, so breaking changes are caught before release.

pub mod error_types;
pub mod wire_formats;
