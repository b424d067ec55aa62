//! Error types for savora.

use thiserror::Error;

/// Result type alias using savora's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for savora operations.
#[derive(Error, Debug)]
pub enum Error {
    /// AI credential absent or configuration invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote generation returned no usable or shape-valid content
    #[error("Generation error: {0}")]
    Generation(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
