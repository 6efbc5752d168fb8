/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalogue error: {0}")]
    Catalogue(#[from] booth_core::CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] booth_storage::StorageError),

    #[error("Sync error: {0}")]
    Sync(#[from] booth_sync::SyncError),

    #[error("Queue error: {0}")]
    Queue(#[from] booth_playback::PlaybackError),

    #[error("{0}")]
    Import(#[from] booth_importer::ImportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
