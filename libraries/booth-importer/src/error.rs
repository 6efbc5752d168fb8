//! Error types for the importer

use crate::importer::ImportReport;
use booth_playback::PlaybackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Buffer named shows missing from the catalogue; the queue is untouched
    #[error("Import rejected: {} show(s) not in the archive", .0.invalid.len())]
    Rejected(ImportReport),

    #[error("Queue error: {0}")]
    Queue(#[from] PlaybackError),
}
