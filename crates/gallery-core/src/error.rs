//! Error types for Gallery View

use thiserror::Error;

/// Main error type for Gallery View operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// User directory has no entry for the email
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Table was not found in the base
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Base fixture is structurally invalid
    #[error("Invalid base: {0}")]
    InvalidBase(String),

    /// Locale identifier is not supported
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Error during JSON serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
