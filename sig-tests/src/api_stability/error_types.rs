//! Error Type Stability Tests
//!
//! Display strings and serialized shapes of `SigError` are part of the
//! observable API (logs, IPC).
