#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Fixed-Output Random Source
//!
//! Replays a caller-supplied byte stream. Substituting it for the OS generator
//! makes key generation and signing reproducible, which is what known-answer
//! tests need. It provides no secrecy whatsoever and must never back real keys.

use rand_core::{CryptoRng, Error, RngCore, impls};

/// Random source that replays a fixed byte stream
///
/// In one-shot mode (the default) the stream is served once and
/// [`RngCore::try_fill_bytes`] fails once it runs dry; in cycling mode it
/// wraps around forever.
#[derive(Debug, Clone)]
pub struct FixedOutputRng {
    stream: Vec<u8>,
    position: usize,
    cycle: bool,
}

impl FixedOutputRng {
    /// Serve `stream` once, then report exhaustion
    #[must_use]
    pub fn new(stream: impl Into<Vec<u8>>) -> Self {
        Self { stream: stream.into(), position: 0, cycle: false }
    }

    /// Serve `stream` repeatedly
    #[must_use]
    pub fn cycling(stream: impl Into<Vec<u8>>) -> Self {
        Self { stream: stream.into(), position: 0, cycle: true }
    }

    /// Number of bytes still available before exhaustion (`None` when cycling)
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        if self.cycle { None } else { Some(self.stream.len().saturating_sub(self.position)) }
    }
}

impl RngCore for FixedOutputRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    /// Infallible variant: bytes past exhaustion are left zeroed.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
        // Exhaustion leaves the zeroed tail; callers needing the error use try_fill_bytes
        let _ = self.try_fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        for byte in dest.iter_mut() {
            if self.position >= self.stream.len() {
                if self.cycle && !self.stream.is_empty() {
                    self.position = 0;
                } else {
                    return Err(Error::new("fixed output stream exhausted"));
                }
            }
            *byte = self.stream.get(self.position).copied().unwrap_or_default();
            self.position = self.position.saturating_add(1);
        }
        Ok(())
    }
}

// Marker only: the output is fully predictable.
impl CryptoRng for FixedOutputRng {}
