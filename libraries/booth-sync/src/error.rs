use booth_storage::StorageError;
use thiserror::Error;

/// Errors that can occur while wiring up queue synchronization
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
