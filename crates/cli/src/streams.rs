// crates/cli/src/streams.rs
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Where records are read from.
#[derive(Debug, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File { path: PathBuf, file: File },
}

/// Where the report is written to.
#[derive(Debug, Default)]
pub enum OutputSink {
    #[default]
    Stdout,
    File { path: PathBuf, file: File },
}

impl InputSource {
    /// Open `path` for reading.
    ///
    /// # Errors
    /// Returns [`CliError::OpenInput`] if the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| CliError::OpenInput {
            path: path.clone(),
            source,
        })?;
        Ok(Self::File { path, file })
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File { path, .. } => Some(path),
        }
    }

    /// Consume the source; the handle is closed when the reader is dropped.
    #[must_use]
    pub fn into_reader(self) -> Box<dyn Read> {
        match self {
            Self::Stdin => Box::new(io::stdin().lock()),
            Self::File { file, .. } => Box::new(BufReader::new(file)),
        }
    }
}

impl OutputSink {
    /// Create (or truncate) `path` for writing.
    ///
    /// # Errors
    /// Returns [`CliError::OpenOutput`] if the file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| CliError::OpenOutput {
            path: path.clone(),
            source,
        })?;
        Ok(Self::File { path, file })
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File { path, .. } => Some(path),
        }
    }

    /// Buffered writer over the sink. Callers must flush before dropping it.
    #[must_use]
    pub fn into_writer(self) -> Box<dyn Write> {
        match self {
            Self::Stdout => Box::new(BufWriter::new(io::stdout().lock())),
            Self::File { file, .. } => Box::new(BufWriter::new(file)),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("<stdin>"),
        }
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("<stdout>"),
        }
    }
}
