// Error kinds shared by every fetch and sink step. Each dispatch surfaces
// at most one of these as a single failure line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A page or id that could not be coerced to a positive number.
    #[error("{0}")]
    InvalidArgument(String),

    /// HTTP failure, non-success status, or a missing API credential.
    #[error("network request failed: {0}")]
    Network(String),

    /// Missing, unreadable, or unparseable cache file.
    #[error("file store error: {0}")]
    FileSystem(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::FileSystem(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
