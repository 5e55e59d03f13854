//! Error types for the bcard-core library.

use thiserror::Error;

/// Main error type for the bcard library.
///
/// The extraction engine itself is infallible; errors only arise at the
/// configuration and serialization boundary.
#[derive(Error, Debug)]
pub enum BcardError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the bcard library.
pub type Result<T> = std::result::Result<T, BcardError>;
