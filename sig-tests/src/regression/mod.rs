//! Regression Tests
//!
//! Each file pins one encoding edge case that is easy to get wrong.
//!
//! ## File Naming Convention
//!
//! `issue_NNN_short_description.rs`
//!
//! Each file's doc comment describes the edge case, the guarantee and the
//! test strategy.

pub mod issue_001_point_encoding_x_coordinate;
pub mod issue_002_short_signature_components;
pub mod issue_003_half_present_public_key;
