//! # sig-tests
//!
//! Cross-crate test suites for sig-p256r1:
//!
//! - **Regression Tests**: Prevent reintroduction of fixed bugs
//! - **API Stability Tests**: Pin wire formats, constants and error variants
//! - **Concurrency Tests**: Verify thread-safe operation
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sig-tests
//! cargo test -p sig-tests regression
//! ```
//!
//! ## Test Naming Convention
//!
//! - Regression: `regression_issue_NNN_description`
//! - API Stability: `api_stability_<aspect>_<test>`
//! - Concurrency: `concurrent_<operation>_<scenario>`

#![allow(clippy::expect_used)] // Tests use expect for clarity

pub mod api_stability;
pub mod concurrency;
pub mod regression;

/// Shared test utilities
pub mod utils {
    use rand::rngs::OsRng;
    use sig_primitives::ec::p256r1::Keypair;

    /// Cryptographically secure RNG for tests
    #[must_use]
    pub fn test_rng() -> OsRng {
        OsRng
    }

    /// Generate a keypair from the test RNG
    ///
    /// # Panics
    ///
    /// Panics if key generation fails.
    #[must_use]
    pub fn test_keypair() -> Keypair {
        Keypair::generate_with_rng(&mut test_rng()).expect("keypair generation should succeed")
    }

    /// Search up to `limit` fresh keypairs for one whose public key satisfies `pred`
    #[must_use]
    pub fn find_keypair(limit: usize, pred: impl Fn(&Keypair) -> bool) -> Option<Keypair> {
        (0..limit).map(|_| test_keypair()).find(|kp| pred(kp))
    }

    /// Assert two byte slices are equal with descriptive message
    ///
    /// # Panics
    ///
    /// Panics if `left` and `right` are not equal, displaying the provided `context`.
    pub fn assert_bytes_eq(left: &[u8], right: &[u8], context: &str) {
        assert_eq!(left, right, "{}: byte slices differ", context);
    }
}
