//! Batch key generation over a token registry.
//!
//! A caller assembles a [`TokenRegistry`](randkey_core::TokenRegistry),
//! wraps it in a [`GenerationRequest`] and hands it to
//! [`KeyGenerator::generate`]. Three seeding policies are supported:
//!
//! - **deterministic**: a deterministic seed drives a pinned MT19937-64
//!   engine, so identical requests always produce identical keys;
//! - **mixing**: a caller seed adds a reproducible perturbation on top of
//!   secure random draws;
//! - **secure**: no seed is given, so a fresh mixing seed is drawn from the
//!   entropy source and echoed back in the [`GenerationOutcome`].

pub mod error;
pub mod generator;
pub mod request;

pub use error::GenerateError;
pub use generator::{KeyGenerator, GOLDEN_RATIO};
pub use request::{GenerationOutcome, GenerationRequest};
