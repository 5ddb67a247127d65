use crate::error::CliError;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where generated keys go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File { path: PathBuf, force: bool },
}

impl OutputTarget {
    pub fn new(output: Option<PathBuf>, force: bool) -> Self {
        match output {
            Some(path) => OutputTarget::File { path, force },
            None => OutputTarget::Stdout,
        }
    }

    /// Writes one key per line, to `stdout` or to the target file.
    ///
    /// `stdout` is left untouched when the target is a file.
    pub fn write_keys<W: Write>(&self, stdout: W, keys: &[String]) -> Result<(), CliError> {
        match self {
            OutputTarget::Stdout => write_lines(stdout, keys).map_err(|source| CliError::Write {
                target: "stdout".to_string(),
                source,
            }),
            OutputTarget::File { path, force } => write_file(path, *force, keys),
        }
    }
}

fn write_file(path: &Path, force: bool, keys: &[String]) -> Result<(), CliError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let write_error = |source| CliError::Write {
        target: path.display().to_string(),
        source,
    };
    let file = options.open(path).map_err(|err| match err.kind() {
        io::ErrorKind::AlreadyExists => CliError::OutputExists(path.to_path_buf()),
        _ => write_error(err),
    })?;
    write_lines(file, keys).map_err(write_error)
}

fn write_lines<W: Write>(writer: W, keys: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for key in keys {
        writeln!(writer, "{key}")?;
    }
    writer.flush()
}
