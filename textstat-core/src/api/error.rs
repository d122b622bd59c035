//! Error types for the API

use crate::application::ProcessingError;
use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid chunk size or thread count, rejected before any work starts
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Processing error from the application layer
    #[error("Processing error: {0}")]
    Processing(#[source] ProcessingError),

    /// Input could not be read or decoded
    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<ProcessingError> for Error {
    fn from(err: ProcessingError) -> Self {
        match err {
            ProcessingError::InvalidConfig { reason } => Error::InvalidConfiguration(reason),
            other => Error::Processing(other),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
