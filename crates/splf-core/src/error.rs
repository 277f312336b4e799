//! Error types for the spooled file toolkit.

use thiserror::Error;

/// Main error type for spooled file operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input that cannot be treated as print-stream text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Page length outside the accepted range
    #[error("Invalid page length: {0}")]
    InvalidPageLength(usize),

    /// Name pattern references a field the spooled file does not have
    #[error("Unknown name pattern field: {0}")]
    UnknownPatternField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
