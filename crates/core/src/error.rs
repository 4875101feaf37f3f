use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatError {
    #[error("Failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StatError>;
