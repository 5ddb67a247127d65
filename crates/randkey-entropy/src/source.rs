use crate::backend;
use crate::error::{EntropyError, Result};
use crate::sample::sample_below;
use std::num::NonZeroU64;

/// A source of cryptographically secure random bytes.
///
/// Implementors provide [`available`](Self::available) and
/// [`fill`](Self::fill); integer sampling is layered on top and should not
/// be overridden.
pub trait EntropySource: Send + Sync {
    /// Returns whether the underlying source can be opened. Never fails.
    fn available(&self) -> bool;

    /// Fills `buf` entirely with secure random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;

    /// Draws a full 64-bit value from 8 bytes, most significant byte first.
    fn next_u64(&self) -> Result<u64> {
        let mut bytes = [0_u8; 8];
        self.fill(&mut bytes)?;
        Ok(u64::from_be_bytes(bytes))
    }

    /// Returns a value uniformly distributed over `[0, upper_bound)`.
    ///
    /// Uses rejection sampling (see [`crate::sample`]), so no value in range
    /// is more likely than another. Fails with
    /// [`EntropyError::InvalidArgument`] when `upper_bound` is zero.
    fn uniform(&self, upper_bound: u64) -> Result<u64> {
        let upper = NonZeroU64::new(upper_bound).ok_or_else(|| {
            EntropyError::InvalidArgument("uniform upper bound must be greater than zero".into())
        })?;
        sample_below(upper, || self.next_u64())
    }
}

/// The platform's secure random source.
///
/// The underlying handle is opened lazily on first use and shared by every
/// `SystemEntropy` value in the process, so this type is free to construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl SystemEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for SystemEntropy {
    fn available(&self) -> bool {
        backend::available()
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }
        backend::fill(buf)
    }
}
