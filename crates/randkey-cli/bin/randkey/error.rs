use randkey_core::RegistryError;
use randkey_generator::GenerateError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("output file already exists: {} (pass --force to overwrite)", .0.display())]
    OutputExists(PathBuf),
    #[error("failed to write keys to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Stable identifier printed alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Registry(err) => err.kind().as_str(),
            CliError::Generate(err) => err.kind().as_str(),
            CliError::OutputExists(_) => "output_exists",
            CliError::Write { .. } => "write_file",
        }
    }
}
