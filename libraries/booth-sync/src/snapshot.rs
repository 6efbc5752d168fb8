//! Persisted queue snapshot

use crate::error::{Result, SyncError};
use booth_core::ShowId;
use booth_playback::{QueueChange, QueueObserver, QueueStore};
use booth_storage::{keys, KeyValueStore, PersistentStore};
use serde_json::Value;
use tracing::{debug, error, info};

/// Queue observer writing the full order on every change
///
/// Writes are fire-and-forget: a failed write is logged and the queue keeps
/// going.
#[derive(Debug)]
pub struct SnapshotWriter<S> {
    store: PersistentStore<S>,
    key: String,
}

impl<S: KeyValueStore> SnapshotWriter<S> {
    /// Writer for `key`
    pub fn new(store: PersistentStore<S>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if !keys::is_valid(&key) {
            return Err(SyncError::InvalidKey(key));
        }
        Ok(Self { store, key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &PersistentStore<S> {
        &self.store
    }
}

impl<S: KeyValueStore> QueueObserver for SnapshotWriter<S> {
    fn queue_changed(&mut self, change: &QueueChange) {
        if let Err(e) = self.store.store(&self.key, &change.snapshot) {
            error!("Failed to persist queue snapshot: {}", e);
        }
    }
}

/// Rebuild `queue` from the snapshot stored at `key`
///
/// An absent or corrupt snapshot restores an empty queue. Entries that are
/// not identifiers, or shows that left the catalogue since the snapshot was
/// written, are dropped. Returns the restored length.
pub fn restore<S: KeyValueStore>(
    store: &PersistentStore<S>,
    key: &str,
    queue: &mut QueueStore,
) -> usize {
    let entries: Vec<Value> = store.retrieve(key, Vec::new());
    let stored = entries.len();

    queue.resync(snapshot_ids(entries));

    info!("Restored {} of {} queued shows", queue.len(), stored);
    queue.len()
}

/// Identifiers of a stored snapshot array
///
/// Non-string entries are skipped so one bad element does not cost the rest.
pub(crate) fn snapshot_ids(entries: Vec<Value>) -> Vec<ShowId> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(id) => Some(ShowId::new(id)),
            other => {
                debug!("Dropping non-identifier snapshot entry: {}", other);
                None
            }
        })
        .collect()
}
