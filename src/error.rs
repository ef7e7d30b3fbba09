//! Error types for anytag

use thiserror::Error;

/// Result type alias for anytag operations
pub type Result<T> = std::result::Result<T, TagError>;

/// Tag helper error types
#[derive(Error, Debug)]
pub enum TagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// One annotator serves exactly one text source
    #[error("Annotator is already attached. Create a separate TagAnnotator for every text source")]
    AlreadyAttached,

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid marker: {0}")]
    InvalidMarker(String),

    #[error("{0}")]
    Message(String),
}
