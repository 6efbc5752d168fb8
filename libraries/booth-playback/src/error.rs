//! Error types for queue management

use booth_core::ShowId;
use thiserror::Error;

/// Queue errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// Show is not in the catalogue
    #[error("Show not found: {0}")]
    NotFound(ShowId),

    /// Replacement list contains shows missing from the catalogue
    #[error("Invalid show ids: {}", join(.0))]
    InvalidIds(Vec<ShowId>),
}

fn join(ids: &[ShowId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
