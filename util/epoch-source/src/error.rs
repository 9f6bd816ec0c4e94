use explorer_error::{Error, ErrorKind};
use std::path::PathBuf;
use thiserror::Error;

/// The error type of data sources.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The fixture file cannot be read.
    #[error("failed to read fixture {}: {source}", .path.display())]
    Io {
        /// The fixture path.
        path: PathBuf,
        /// The cause.
        source: std::io::Error,
    },

    /// The fixture file is not a valid fixture document.
    #[error("invalid fixture {}: {source}", .path.display())]
    Json {
        /// The fixture path.
        path: PathBuf,
        /// The cause.
        source: serde_json::Error,
    },
}

impl From<SourceError> for Error {
    fn from(error: SourceError) -> Self {
        ErrorKind::Source.because(error)
    }
}
