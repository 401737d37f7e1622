//! Error types and result aliases.
//!
//! Defines the `ServerError` enumeration used by startup and the listener,
//! and the common `Result` type.

use thiserror::Error;

/// Server-level errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Socket or bind failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `ServerError`.
pub type Result<T> = std::result::Result<T, ServerError>;
