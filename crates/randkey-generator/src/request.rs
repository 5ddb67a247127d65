use crate::error::{GenerateError, Result};
use randkey_core::TokenRegistry;
use std::num::NonZeroUsize;
use typed_builder::TypedBuilder;

pub const DEFAULT_LENGTH: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(length) => length,
    None => panic!("default length must be non-zero"),
};
pub const DEFAULT_COUNT: NonZeroUsize = NonZeroUsize::MIN;

/// Parameters for one batch of keys.
///
/// # Example
///
/// ```rust
/// use randkey_core::{BuiltinCharset, TokenRegistry};
/// use randkey_generator::GenerationRequest;
/// use std::num::NonZeroUsize;
///
/// let mut registry = TokenRegistry::new();
/// registry.include(BuiltinCharset::Digits);
///
/// let request = GenerationRequest::builder()
///     .registry(registry)
///     .length(NonZeroUsize::new(5).unwrap())
///     .count(NonZeroUsize::new(2).unwrap())
///     .deterministic_seed(42)
///     .build();
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct GenerationRequest {
    /// Tokens to select from. Materialized once, just before generation;
    /// the insertion order is the selection index space.
    #[builder(default)]
    pub registry: TokenRegistry,

    /// Number of tokens concatenated into each key.
    #[builder(default = DEFAULT_LENGTH)]
    pub length: NonZeroUsize,

    /// Number of keys to produce.
    #[builder(default = DEFAULT_COUNT)]
    pub count: NonZeroUsize,

    /// Seed for fully reproducible output. Excludes `mixing_seed`.
    #[builder(default, setter(strip_option(fallback = deterministic_seed_opt)))]
    pub deterministic_seed: Option<u64>,

    /// Seed perturbing secure draws. Excludes `deterministic_seed`.
    #[builder(default, setter(strip_option(fallback = mixing_seed_opt)))]
    pub mixing_seed: Option<u64>,

    /// Apply the lowercase + digits default when the registry is empty.
    ///
    /// Turning this off makes an empty registry fail with
    /// [`GenerateError::EmptyCharset`].
    #[builder(default = true)]
    pub fallback_to_default: bool,
}

impl GenerationRequest {
    /// Checks the seed fields for mutual exclusion.
    pub fn validate(&self) -> Result<()> {
        if self.deterministic_seed.is_some() && self.mixing_seed.is_some() {
            return Err(GenerateError::ConflictingSeed);
        }
        Ok(())
    }
}

/// The keys of one batch together with the seeds that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Keys in batch order; `keys.len()` equals the requested count.
    pub keys: Vec<String>,
    /// The caller's deterministic seed, if one was given.
    pub deterministic_seed_echo: Option<u64>,
    /// The mixing seed in effect: the caller's, or a freshly drawn one when
    /// neither seed was given. This is the only way to recover a drawn seed.
    pub mixing_seed_echo: Option<u64>,
}
