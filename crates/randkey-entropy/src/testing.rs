//! Test doubles for [`EntropySource`].

use crate::error::{EntropyError, Result};
use crate::source::EntropySource;
use std::collections::VecDeque;
use std::sync::Mutex;

/// An entropy source that replays a fixed byte script.
///
/// Once the script runs out, or after the configured number of successful
/// fills, every further `fill` fails with [`EntropyError::Unavailable`].
#[derive(Debug)]
pub struct ScriptedEntropy {
    inner: Mutex<ScriptState>,
}

#[derive(Debug)]
struct ScriptState {
    bytes: VecDeque<u8>,
    available: bool,
    fills: usize,
    fail_after: Option<usize>,
}

impl ScriptedEntropy {
    pub fn from_bytes(bytes: impl IntoIterator<Item = u8>) -> Self {
        Self::with_state(bytes.into_iter().collect(), true)
    }

    /// Scripts whole 64-bit draws, each consumed by one `next_u64`.
    pub fn from_words(words: impl IntoIterator<Item = u64>) -> Self {
        Self::from_bytes(words.into_iter().flat_map(u64::to_be_bytes))
    }

    /// A source that reports itself unavailable and fails every fill.
    pub fn unavailable() -> Self {
        Self::with_state(VecDeque::new(), false)
    }

    /// Fails every fill after the first `fills` successful ones.
    pub fn fail_after(self, fills: usize) -> Self {
        self.lock().fail_after = Some(fills);
        self
    }

    /// Number of successful fills so far.
    pub fn fills(&self) -> usize {
        self.lock().fills
    }

    /// Bytes left in the script.
    pub fn remaining(&self) -> usize {
        self.lock().bytes.len()
    }

    fn with_state(bytes: VecDeque<u8>, available: bool) -> Self {
        Self {
            inner: Mutex::new(ScriptState {
                bytes,
                available,
                fills: 0,
                fail_after: None,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState> {
        self.inner
            .lock()
            .expect("scripted entropy lock should not be poisoned")
    }
}

impl EntropySource for ScriptedEntropy {
    fn available(&self) -> bool {
        self.lock().available
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        let mut state = self.lock();
        if !state.available {
            return Err(EntropyError::Unavailable("scripted source is closed".into()));
        }
        if state.fail_after.is_some_and(|limit| state.fills >= limit) {
            return Err(EntropyError::Unavailable("scripted read failure".into()));
        }
        if state.bytes.len() < buf.len() {
            return Err(EntropyError::Unavailable("script exhausted".into()));
        }
        for slot in buf.iter_mut() {
            *slot = state.bytes.pop_front().unwrap_or_default();
        }
        state.fills += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_words_in_order() {
        let source = ScriptedEntropy::from_words([7, 11]);
        assert_eq!(source.next_u64().unwrap(), 7);
        assert_eq!(source.next_u64().unwrap(), 11);
        assert_eq!(source.remaining(), 0);
        assert!(source.next_u64().is_err());
    }

    #[test]
    fn fail_after_limits_fills() {
        let source = ScriptedEntropy::from_words([1, 2, 3]).fail_after(1);
        assert!(source.next_u64().is_ok());
        assert!(source.next_u64().is_err());
        assert_eq!(source.fills(), 1);
    }

    #[test]
    fn unavailable_source_reports_itself() {
        let source = ScriptedEntropy::unavailable();
        assert!(!source.available());
        assert!(source.fill(&mut [0_u8; 4]).is_err());
    }
}
