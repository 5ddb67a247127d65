use crate::error::{EntropyError, Result};
use std::sync::OnceLock;
use tracing::warn;

static AVAILABLE: OnceLock<bool> = OnceLock::new();

pub(crate) fn available() -> bool {
    *AVAILABLE.get_or_init(|| {
        let mut byte = [0_u8; 1];
        match getrandom::fill(&mut byte) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "system random source is unavailable");
                false
            }
        }
    })
}

pub(crate) fn fill(buf: &mut [u8]) -> Result<()> {
    getrandom::fill(buf)
        .map_err(|err| EntropyError::Unavailable(format!("system random source failed: {err}")))
}
