//! Concurrency Tests
//!
//! Verifies thread-safe operation of the P-256 scheme and the convenience API.
//!
//! Note: Additional concurrency tests are in `sig-primitives/tests/concurrency_tests.rs`

pub mod parallel_keygen;
pub mod thread_safety;
