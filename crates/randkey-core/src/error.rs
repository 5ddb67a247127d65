use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Symbolic identifier for every failure the generator can surface.
///
/// Front ends translate these into user-facing text; the identifiers returned
/// by [`ErrorKind::as_str`] are stable and safe to use as catalog keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Both a deterministic and a mixing seed were supplied.
    ConflictingSeed,
    /// No tokens were available for selection.
    EmptyCharset,
    /// A character or token file could not be read.
    CharsetFileUnavailable,
    /// The cryptographic random source could not be opened or read.
    EntropyUnavailable,
    /// An operation was called with an argument outside its domain.
    InvalidArgument,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConflictingSeed => "conflicting_seed",
            ErrorKind::EmptyCharset => "empty_charset",
            ErrorKind::CharsetFileUnavailable => "charset_file_unavailable",
            ErrorKind::EntropyUnavailable => "entropy_unavailable",
            ErrorKind::InvalidArgument => "invalid_argument",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("charset file unavailable: {path}: {source}")]
    CharsetFileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::CharsetFileUnavailable { .. } => ErrorKind::CharsetFileUnavailable,
        }
    }
}
