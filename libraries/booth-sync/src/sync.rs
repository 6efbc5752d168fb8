//! Cross-context queue synchronization
//!
//! Every context (tab, window, process) owns its own queue. When another
//! context writes the snapshot, this one rebuilds from it. There is no merge:
//! the last write wins.

use crate::error::{Result, SyncError};
use crate::snapshot::snapshot_ids;
use crate::types::SyncOutcome;
use booth_core::ShowId;
use booth_playback::QueueStore;
use booth_storage::{keys, ExternalChanges, KeyValueStore, PersistentStore, StorageEvent};
use tracing::{debug, info, warn};

/// Applies snapshots written by other contexts to the local queue
#[derive(Debug)]
pub struct CrossContextSync {
    changes: ExternalChanges,
    key: String,
}

impl CrossContextSync {
    /// Subscribe to changes of `key` made by other contexts
    pub fn new<S: KeyValueStore>(store: &PersistentStore<S>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if !keys::is_valid(&key) {
            return Err(SyncError::InvalidKey(key));
        }
        let changes = store.subscribe()?;
        Ok(Self { changes, key })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Apply everything pending without waiting
    ///
    /// Only the latest snapshot matters, so earlier ones are skipped.
    pub fn pump(&mut self, queue: &mut QueueStore) -> SyncOutcome {
        let events = self.changes.drain();
        if events.is_empty() {
            return SyncOutcome::Unchanged;
        }

        let latest = events.into_iter().rev().find(|event| event.key == self.key);
        match latest {
            Some(event) => self.apply(&event, queue),
            None => SyncOutcome::Ignored,
        }
    }

    /// Wait for the next change and apply it
    ///
    /// Returns `None` once the backend stops delivering changes.
    pub async fn next(&mut self, queue: &mut QueueStore) -> Option<SyncOutcome> {
        let event = self.changes.next().await?;
        Some(self.apply(&event, queue))
    }

    /// Apply one external change
    pub fn apply(&self, event: &StorageEvent, queue: &mut QueueStore) -> SyncOutcome {
        if event.key != self.key {
            debug!("Ignoring external change to {}", event.key);
            return SyncOutcome::Ignored;
        }

        let ids = parse_snapshot(event.new_value.as_deref());
        if ids == queue.ids() {
            debug!("External snapshot matches local queue");
            return SyncOutcome::Unchanged;
        }

        queue.resync(ids);
        info!("Queue resynced from another context ({} shows)", queue.len());
        SyncOutcome::Resynced { len: queue.len() }
    }
}

/// Removed and corrupt snapshots both read as an empty queue
///
/// Non-string entries of an otherwise valid array are skipped.
fn parse_snapshot(raw: Option<&str>) -> Vec<ShowId> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(entries) => snapshot_ids(entries),
        Err(e) => {
            warn!("Ignoring corrupt queue snapshot from another context: {}", e);
            Vec::new()
        }
    }
}
