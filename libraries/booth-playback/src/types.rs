//! Core types for queue management

use booth_core::{ShowId, ShowMetadata};
use serde::{Deserialize, Serialize};

/// One queued show
///
/// Display data is resolved from the catalogue when the show is added and
/// kept as-is until the queue is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Show identifier
    pub id: ShowId,

    /// Display metadata resolved at add time
    pub show: ShowMetadata,
}

impl QueueEntry {
    /// Entry for a resolved show
    pub fn new(show: ShowMetadata) -> Self {
        Self {
            id: show.id.clone(),
            show,
        }
    }
}

/// Externally visible queue state
///
/// Governs whether transport controls are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueState {
    /// Nothing queued
    Empty,

    /// At least one show queued
    NonEmpty,
}

impl QueueState {
    pub(crate) fn for_len(len: usize) -> Self {
        if len == 0 {
            Self::Empty
        } else {
            Self::NonEmpty
        }
    }
}

/// Settings owned outside the queue that shape playback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Start the next show automatically when one finishes (default: true)
    pub continuous: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self { continuous: true }
    }
}
