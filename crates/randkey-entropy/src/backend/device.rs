use crate::error::{EntropyError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::sync::OnceLock;
use tracing::warn;

const DEVICE_PATH: &str = "/dev/urandom";

// Opened on first use and kept for the life of the process.
static DEVICE: OnceLock<Option<File>> = OnceLock::new();

fn device() -> Option<&'static File> {
    DEVICE
        .get_or_init(|| match File::open(DEVICE_PATH) {
            Ok(file) => Some(file),
            Err(err) => {
                warn!(path = DEVICE_PATH, error = %err, "failed to open random device");
                None
            }
        })
        .as_ref()
}

pub(crate) fn available() -> bool {
    device().is_some()
}

pub(crate) fn fill(buf: &mut [u8]) -> Result<()> {
    let mut file = device()
        .ok_or_else(|| EntropyError::Unavailable(format!("cannot open {DEVICE_PATH}")))?;
    read_exact_from(&mut file, buf)
}

/// Fills `buf` completely, retrying reads interrupted by signals.
///
/// End of stream before `buf` is full is an error; a random device never
/// legitimately runs dry.
fn read_exact_from<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => {
            EntropyError::Unavailable(format!("{DEVICE_PATH} returned end of stream"))
        }
        _ => EntropyError::Unavailable(format!("read from {DEVICE_PATH} failed: {err}")),
    })
}
