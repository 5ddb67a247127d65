//! Unbiased reduction of 64-bit draws onto `[0, upper)`.
//!
//! Taking `draw % upper` directly favours small remainders whenever `upper`
//! does not divide 2^64. Instead, draws at or above
//! `threshold = MAX - (MAX % upper)` are discarded and redrawn; the accepted
//! range `[0, threshold)` holds a whole number of copies of every residue.
//!
//! The same rule selects indices for both the secure source and the seeded
//! deterministic engine, so the deterministic selection formula is pinned
//! independently of any particular random library.

use std::num::NonZeroU64;

/// Returns the exclusive acceptance bound for draws reduced modulo `upper`.
pub fn rejection_threshold(upper: NonZeroU64) -> u64 {
    u64::MAX - (u64::MAX % upper.get())
}

/// Draws from `draw` until a value below the threshold appears and returns
/// it reduced modulo `upper`.
///
/// Errors from `draw` are returned immediately.
pub fn sample_below<E, F>(upper: NonZeroU64, mut draw: F) -> Result<u64, E>
where
    F: FnMut() -> Result<u64, E>,
{
    let threshold = rejection_threshold(upper);
    loop {
        let value = draw()?;
        if value < threshold {
            return Ok(value % upper.get());
        }
    }
}
