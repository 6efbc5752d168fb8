/// Core error types for Booth
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Booth
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalogue could not be loaded
    #[error("Catalogue error: {0}")]
    Catalogue(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a catalogue error
    pub fn catalogue(msg: impl Into<String>) -> Self {
        Self::Catalogue(msg.into())
    }
}
