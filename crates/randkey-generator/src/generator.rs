use crate::error::{GenerateError, Result};
use crate::request::{GenerationOutcome, GenerationRequest};
use rand_mt::Mt64;
use randkey_core::Token;
use randkey_entropy::{sample_below, EntropySource, SystemEntropy};
use std::convert::Infallible;
use std::num::NonZeroU64;
use tracing::{debug, trace};

/// Odd 64-bit multiplier spreading per-key seeds across a batch.
///
/// Only decorrelates neighbouring indices; it adds no secrecy.
pub const GOLDEN_RATIO: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed policy of one batch, resolved before the first key is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedMode {
    Deterministic(u64),
    Mixing(u64),
}

/// Generates batches of keys by selecting whole tokens.
///
/// Keys are produced sequentially in increasing batch index, and the index
/// feeds the per-key seed, so key `i` of a batch does not depend on how many
/// keys come after it.
pub struct KeyGenerator<E: EntropySource = SystemEntropy> {
    entropy: E,
}

impl KeyGenerator<SystemEntropy> {
    /// Creates a generator backed by the platform's secure random source.
    pub fn new() -> Self {
        Self::with_entropy(SystemEntropy::new())
    }
}

impl Default for KeyGenerator<SystemEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> KeyGenerator<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Generates `request.count` keys.
    ///
    /// The batch is all-or-nothing: seed conflicts and an empty charset are
    /// rejected before any key is built, and an entropy failure part way
    /// through discards the keys produced so far.
    pub fn generate(&self, request: GenerationRequest) -> Result<GenerationOutcome> {
        request.validate()?;

        let GenerationRequest {
            mut registry,
            length,
            count,
            deterministic_seed,
            mixing_seed,
            fallback_to_default,
        } = request;

        if fallback_to_default {
            registry.ensure_default();
        }
        let tokens = registry.materialize();
        if tokens.is_empty() {
            return Err(GenerateError::EmptyCharset);
        }

        let mode = match (deterministic_seed, mixing_seed) {
            (Some(seed), _) => SeedMode::Deterministic(seed),
            (None, Some(seed)) => SeedMode::Mixing(seed),
            (None, None) => {
                trace!("drawing fresh mixing seed");
                SeedMode::Mixing(self.entropy.next_u64()?)
            }
        };

        let mode_name = match mode {
            SeedMode::Deterministic(_) => "deterministic",
            SeedMode::Mixing(_) if mixing_seed.is_some() => "mixing",
            SeedMode::Mixing(_) => "secure",
        };
        debug!(
            mode = mode_name,
            tokens = tokens.len(),
            phrases = tokens.iter().filter(|token| token.is_phrase()).count(),
            length = length.get(),
            count = count.get(),
            "generating key batch"
        );

        let (deterministic, mixing) = match mode {
            SeedMode::Deterministic(seed) => (Some(seed), None),
            SeedMode::Mixing(seed) => (None, Some(seed)),
        };

        let keys = (0..count.get() as u64)
            .map(|index| self.generate_single(&tokens, length.get(), deterministic, mixing, index))
            .collect::<Result<Vec<_>>>()?;

        Ok(GenerationOutcome {
            keys,
            deterministic_seed_echo: deterministic,
            mixing_seed_echo: mixing,
        })
    }

    /// Builds the key at batch position `index` from `length` whole tokens.
    ///
    /// With a deterministic seed, an MT19937-64 engine seeded with
    /// `seed + index * GOLDEN_RATIO` (wrapping) supplies `length` successive
    /// draws, each reduced by rejection sampling to a token index. Otherwise
    /// every position is drawn from the entropy source; a mixing seed then
    /// shifts the draw by `(seed + index * GOLDEN_RATIO + position) mod n`.
    pub fn generate_single(
        &self,
        tokens: &[Token],
        length: usize,
        deterministic_seed: Option<u64>,
        mixing_seed: Option<u64>,
        index: u64,
    ) -> Result<String> {
        let token_count =
            NonZeroU64::new(tokens.len() as u64).ok_or(GenerateError::EmptyCharset)?;

        let mut key = String::new();
        match (deterministic_seed, mixing_seed) {
            (Some(_), Some(_)) => return Err(GenerateError::ConflictingSeed),
            (Some(seed), None) => {
                let mut engine = Mt64::new(per_key_seed(seed, index));
                for _ in 0..length {
                    let choice =
                        sample_below(token_count, || Ok::<_, Infallible>(engine.next_u64()))
                            .unwrap_or_else(|never| match never {});
                    key.push_str(tokens[choice as usize].as_str());
                }
            }
            (None, mixing_seed) => {
                let n = token_count.get();
                let offset = mixing_seed.map(|seed| per_key_seed(seed, index));
                for position in 0..length as u64 {
                    let drawn = self.entropy.uniform(n)?;
                    let choice = match offset {
                        Some(offset) if n > 1 => {
                            let tweak = offset.wrapping_add(position) % n;
                            add_mod(drawn, tweak, n)
                        }
                        _ => drawn,
                    };
                    key.push_str(tokens[choice as usize].as_str());
                }
            }
        }

        Ok(key)
    }
}

fn per_key_seed(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_mul(GOLDEN_RATIO))
}

/// `(a + b) mod n` for `a, b < n`, without overflowing.
fn add_mod(a: u64, b: u64, n: u64) -> u64 {
    let gap = n - b;
    if a >= gap {
        a - gap
    } else {
        a + b
    }
}
