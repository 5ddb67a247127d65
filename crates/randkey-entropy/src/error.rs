use randkey_core::ErrorKind;
use thiserror::Error;

/// Result type for entropy operations.
pub type Result<T> = std::result::Result<T, EntropyError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntropyError {
    #[error("secure random source unavailable: {0}")]
    Unavailable(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EntropyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EntropyError::Unavailable(_) => ErrorKind::EntropyUnavailable,
            EntropyError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}
