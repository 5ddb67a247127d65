use randkey_core::ErrorKind;
use randkey_entropy::EntropyError;
use thiserror::Error;

/// Result type for key generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("deterministic and mixing seeds are mutually exclusive")]
    ConflictingSeed,
    #[error("no tokens available for selection")]
    EmptyCharset,
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::ConflictingSeed => ErrorKind::ConflictingSeed,
            GenerateError::EmptyCharset => ErrorKind::EmptyCharset,
            GenerateError::Entropy(err) => err.kind(),
        }
    }
}
