//! Queue store
//!
//! The single owner of queue order and membership. Views, controls, the
//! playback driver and persistence are all observers derived from it; none of
//! them reorder anything on their own.
//!
//! ```text
//! Head (loaded into the player)
//!   - Sus-011-Hitch
//! ─────────────────────────────
//! Up next:
//!   - XMin-003-Nightfall
//!   - Esc-042-Leiningen
//! ```

use crate::error::{PlaybackError, Result};
use crate::events::{ChangeKind, FnObserver, QueueChange, QueueObserver};
use crate::shuffle::shuffle_in_place;
use crate::types::{QueueEntry, QueueState};
use booth_core::{Catalogue, ShowId};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Head and state captured before a mutation
struct Before {
    head: Option<ShowId>,
    state: QueueState,
}

/// Ordered, duplicate-free queue of shows
pub struct QueueStore {
    catalogue: Arc<dyn Catalogue>,
    entries: Vec<QueueEntry>,
    observers: Vec<Box<dyn QueueObserver>>,
}

impl fmt::Debug for QueueStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueStore")
            .field("entries", &self.entries)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl QueueStore {
    /// Create an empty queue validated against `catalogue`
    pub fn new(catalogue: Arc<dyn Catalogue>) -> Self {
        Self {
            catalogue,
            entries: Vec::new(),
            observers: Vec::new(),
        }
    }

    // ===== Observers =====

    /// Register an observer; it sees every change committed from now on
    pub fn subscribe(&mut self, observer: impl QueueObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Register a closure as an observer
    pub fn on_change(&mut self, callback: impl FnMut(&QueueChange) + 'static) {
        self.subscribe(FnObserver(callback));
    }

    // ===== Mutations =====

    /// Append a show, or move it to the tail if it is already queued
    ///
    /// Unknown shows are logged and rejected without touching the queue.
    pub fn add(&mut self, id: &ShowId) -> Result<()> {
        let before = self.before();

        if let Some(pos) = self.position(id) {
            let entry = self.entries.remove(pos);
            self.entries.push(entry);
            self.commit(ChangeKind::Bumped(id.clone()), before, Vec::new(), Vec::new());
            return Ok(());
        }

        let Some(show) = self.catalogue.resolve(id) else {
            warn!("Ignoring add of show missing from catalogue: {}", id);
            return Err(PlaybackError::NotFound(id.clone()));
        };

        self.entries.push(QueueEntry::new(show));
        self.commit(
            ChangeKind::Added(id.clone()),
            before,
            vec![id.clone()],
            Vec::new(),
        );
        Ok(())
    }

    /// Remove a show; absent shows are a silent no-op
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &ShowId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };

        let before = self.before();
        self.entries.remove(pos);
        self.commit(
            ChangeKind::Removed(id.clone()),
            before,
            Vec::new(),
            vec![id.clone()],
        );
        true
    }

    /// Swap a show with its predecessor; no-op at the head
    pub fn move_up(&mut self, id: &ShowId) -> bool {
        match self.position(id) {
            Some(pos) if pos > 0 => self.swap(id, pos, pos - 1),
            _ => false,
        }
    }

    /// Swap a show with its successor; no-op at the tail
    pub fn move_down(&mut self, id: &ShowId) -> bool {
        match self.position(id) {
            Some(pos) if pos + 1 < self.entries.len() => self.swap(id, pos, pos + 1),
            _ => false,
        }
    }

    /// Randomly permute the whole queue
    pub fn shuffle(&mut self) -> bool {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Randomly permute the whole queue using `rng`
    ///
    /// Queues of fewer than two shows are left alone and no change is
    /// reported.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let before = self.before();
        if !shuffle_in_place(&mut self.entries, rng) {
            return false;
        }
        self.commit(ChangeKind::Shuffled, before, Vec::new(), Vec::new());
        true
    }

    /// Empty the queue, unselecting every queued show
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        let before = self.before();
        let unselected = self.ids();
        self.entries.clear();
        self.commit(ChangeKind::Cleared, before, Vec::new(), unselected);
    }

    /// Atomically replace the queue with `ids`
    ///
    /// Duplicates collapse onto their first occurrence. If any id is missing
    /// from the catalogue nothing changes and the offending ids are returned.
    /// Only the shows that actually enter or leave are reported as
    /// selected/unselected.
    pub fn import_replace(&mut self, ids: Vec<ShowId>) -> Result<()> {
        let mut entries = Vec::new();
        let mut invalid = Vec::new();
        for id in dedupe(ids) {
            // Already-queued shows keep the display data resolved when added
            let queued = self.entries.iter().find(|entry| entry.id == id).cloned();
            match queued.or_else(|| self.catalogue.resolve(&id).map(QueueEntry::new)) {
                Some(entry) => entries.push(entry),
                None => invalid.push(id),
            }
        }
        if !invalid.is_empty() {
            warn!("Rejecting replacement with {} invalid ids", invalid.len());
            return Err(PlaybackError::InvalidIds(invalid));
        }

        self.replace_entries(entries, ChangeKind::Replaced);
        Ok(())
    }

    /// Rebuild the queue from a persisted snapshot
    ///
    /// Every id is revalidated; ones no longer in the catalogue are dropped.
    /// Never fails.
    pub fn resync(&mut self, ids: Vec<ShowId>) {
        let mut entries = Vec::with_capacity(ids.len());
        for id in dedupe(ids) {
            match self.catalogue.resolve(&id) {
                Some(show) => entries.push(QueueEntry::new(show)),
                None => debug!("Dropping snapshot entry missing from catalogue: {}", id),
            }
        }

        self.replace_entries(entries, ChangeKind::Resynced);
    }

    // ===== Queries =====

    /// Queued shows, head first
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Queued identifiers, head first
    pub fn ids(&self) -> Vec<ShowId> {
        self.entries.iter().map(|entry| entry.id.clone()).collect()
    }

    /// Queued identifiers as plain strings, the persisted form
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.id.to_string()).collect()
    }

    /// Newline-separated identifiers, head first
    pub fn export(&self) -> String {
        self.snapshot().join("\n")
    }

    /// Show at position 0
    pub fn head(&self) -> Option<&QueueEntry> {
        self.entries.first()
    }

    /// Position of `id` in the queue
    pub fn position(&self, id: &ShowId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    /// Whether `id` is queued
    pub fn contains(&self, id: &ShowId) -> bool {
        self.position(id).is_some()
    }

    /// Number of queued shows
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty / non-empty
    pub fn state(&self) -> QueueState {
        QueueState::for_len(self.entries.len())
    }

    /// Catalogue the queue validates against
    pub fn catalogue(&self) -> &Arc<dyn Catalogue> {
        &self.catalogue
    }

    // ===== Internals =====

    fn before(&self) -> Before {
        Before {
            head: self.head().map(|entry| entry.id.clone()),
            state: self.state(),
        }
    }

    fn swap(&mut self, id: &ShowId, from: usize, to: usize) -> bool {
        let before = self.before();
        self.entries.swap(from, to);
        self.commit(
            ChangeKind::Moved {
                id: id.clone(),
                from,
                to,
            },
            before,
            Vec::new(),
            Vec::new(),
        );
        true
    }

    fn replace_entries(&mut self, entries: Vec<QueueEntry>, kind: ChangeKind) {
        let before = self.before();

        let old: HashSet<&ShowId> = self.entries.iter().map(|entry| &entry.id).collect();
        let new: HashSet<&ShowId> = entries.iter().map(|entry| &entry.id).collect();

        let selected: Vec<ShowId> = entries
            .iter()
            .filter(|entry| !old.contains(&entry.id))
            .map(|entry| entry.id.clone())
            .collect();
        let unselected: Vec<ShowId> = self
            .entries
            .iter()
            .filter(|entry| !new.contains(&entry.id))
            .map(|entry| entry.id.clone())
            .collect();

        self.entries = entries;
        self.commit(kind, before, selected, unselected);
    }

    fn commit(
        &mut self,
        kind: ChangeKind,
        before: Before,
        selected: Vec<ShowId>,
        unselected: Vec<ShowId>,
    ) {
        let change = QueueChange {
            kind,
            selected,
            unselected,
            previous_head: before.head,
            head: self.head().cloned(),
            previous_state: before.state,
            state: self.state(),
            snapshot: self.ids(),
        };
        debug!("Queue change: {:?} ({} shows)", change.kind, change.snapshot.len());

        for observer in &mut self.observers {
            observer.queue_changed(&change);
        }
    }
}

/// Drop repeated ids, keeping the first occurrence
pub(crate) fn dedupe(ids: Vec<ShowId>) -> Vec<ShowId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
