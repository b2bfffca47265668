//! Error types for server startup.
//!
//! Store and tool failures have their own types in `catalog::error` and
//! `mcp::error`; this one covers configuration and the listener.

use thiserror::Error;

/// A specialized Result type for server startup.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
