//! Cryptographically secure randomness for key generation.
//!
//! [`EntropySource`] is the capability the generator draws from. The
//! production implementation, [`SystemEntropy`], is backed by exactly one
//! platform source chosen at compile time: the `/dev/urandom` device on Unix
//! targets, the operating system CSPRNG via `getrandom` elsewhere. Neither
//! backend ever degrades to a weaker generator; failures surface as
//! [`EntropyError::Unavailable`].

mod backend;
pub mod error;
pub mod sample;
mod source;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::EntropyError;
pub use sample::{rejection_threshold, sample_below};
pub use source::{EntropySource, SystemEntropy};
