//! Error types for interchange operations.

use thiserror::Error;

/// Errors that can occur while loading or saving profile definitions.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension not recognized as a profile format.
    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat(extension.into())
    }
}
