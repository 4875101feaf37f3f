// crates/cli/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No data type defined!")]
    MissingDataType,

    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    #[error("No sorting type defined!")]
    MissingSortingType,

    #[error("Unknown sorting type: {0}")]
    UnknownSortingType(String),

    #[error("Unexpected token as parameter: {0}")]
    UnexpectedToken(String),

    #[error("Failed to open input file '{}': {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output file '{}': {source}", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write notice: {0}")]
    Notice(#[source] std::io::Error),

    #[error(transparent)]
    Stat(#[from] tally_sort_core::StatError),
}

impl CliError {
    /// Whether the error came from the argument list itself, as opposed to I/O.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::MissingDataType
                | Self::UnknownDataType(_)
                | Self::MissingSortingType
                | Self::UnknownSortingType(_)
                | Self::UnexpectedToken(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
