//! Thread Safety Tests
//!
//! Keys are plain immutable values: they are `Send + Sync` and can be shared
//! behind an `Arc` without locking.
