//! Error types for the abbreviation toolchain.

use thiserror::Error;

/// Errors produced while loading a database or writing a token file.
#[derive(Error, Debug)]
pub enum TokError {
    /// Input database could not be read or is structurally invalid.
    #[error("Database error: {0}")]
    Database(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for toktab operations
pub type Result<T> = std::result::Result<T, TokError>;
