//! Queue change notification
//!
//! Every committed mutation produces exactly one [`QueueChange`], delivered
//! synchronously to each observer before the mutating call returns. Observers
//! derive everything they show from it:
//! - catalogue controls (selected / unselected)
//! - the playback driver (head changes, empty queue)
//! - persistence (the snapshot)

use crate::types::{QueueEntry, QueueState};
use booth_core::ShowId;
use std::cell::RefCell;
use std::rc::Rc;

/// What kind of mutation produced a change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// Show appended to the tail
    Added(ShowId),

    /// Already-queued show moved to the tail by a repeated add
    Bumped(ShowId),

    /// Show removed
    Removed(ShowId),

    /// Show swapped with a neighbour
    Moved {
        /// Show that moved
        id: ShowId,
        /// Previous position
        from: usize,
        /// New position
        to: usize,
    },

    /// Whole queue permuted
    Shuffled,

    /// Queue emptied
    Cleared,

    /// Contents replaced by an import
    Replaced,

    /// Contents rebuilt from a persisted snapshot
    Resynced,
}

/// One committed queue mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueChange {
    /// Mutation that produced this change
    pub kind: ChangeKind,

    /// Shows that entered the queue
    pub selected: Vec<ShowId>,

    /// Shows that left the queue
    pub unselected: Vec<ShowId>,

    /// Head before the mutation
    pub previous_head: Option<ShowId>,

    /// Head after the mutation
    pub head: Option<QueueEntry>,

    /// State before the mutation
    pub previous_state: QueueState,

    /// State after the mutation
    pub state: QueueState,

    /// Full queue order after the mutation
    pub snapshot: Vec<ShowId>,
}

impl QueueChange {
    /// Whether the head identifier differs (including to/from empty)
    pub fn head_changed(&self) -> bool {
        self.previous_head.as_ref() != self.head_id()
    }

    /// Whether the queue crossed between empty and non-empty
    pub fn state_changed(&self) -> bool {
        self.previous_state != self.state
    }

    /// Identifier of the new head
    pub fn head_id(&self) -> Option<&ShowId> {
        self.head.as_ref().map(|entry| &entry.id)
    }
}

/// Receives every committed queue change
pub trait QueueObserver {
    /// Called once per committed mutation, in subscription order
    fn queue_changed(&mut self, change: &QueueChange);
}

/// Shared observers: the caller keeps one handle, the queue the other
impl<T: QueueObserver + ?Sized> QueueObserver for Rc<RefCell<T>> {
    fn queue_changed(&mut self, change: &QueueChange) {
        self.borrow_mut().queue_changed(change);
    }
}

/// Adapter registering a closure as an observer
pub(crate) struct FnObserver<F>(pub(crate) F);

impl<F: FnMut(&QueueChange)> QueueObserver for FnObserver<F> {
    fn queue_changed(&mut self, change: &QueueChange) {
        (self.0)(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booth_core::ShowMetadata;

    fn change(previous_head: Option<&str>, head: Option<&str>) -> QueueChange {
        let head = head.map(|id| QueueEntry::new(ShowMetadata::new(id, "Series", "Title")));
        let state = if head.is_some() {
            QueueState::NonEmpty
        } else {
            QueueState::Empty
        };
        QueueChange {
            kind: ChangeKind::Shuffled,
            selected: Vec::new(),
            unselected: Vec::new(),
            previous_head: previous_head.map(ShowId::from),
            head,
            previous_state: if previous_head.is_some() {
                QueueState::NonEmpty
            } else {
                QueueState::Empty
            },
            state,
            snapshot: Vec::new(),
        }
    }

    #[test]
    fn head_changed_detects_transitions() {
        assert!(change(None, Some("A")).head_changed());
        assert!(change(Some("A"), None).head_changed());
        assert!(change(Some("A"), Some("B")).head_changed());
        assert!(!change(Some("A"), Some("A")).head_changed());
        assert!(!change(None, None).head_changed());
    }

    #[test]
    fn state_changed_only_across_empty() {
        assert!(change(None, Some("A")).state_changed());
        assert!(!change(Some("A"), Some("B")).state_changed());
    }

    #[test]
    fn shared_observer_receives_changes() {
        struct Counter(usize);
        impl QueueObserver for Counter {
            fn queue_changed(&mut self, _change: &QueueChange) {
                self.0 += 1;
            }
        }

        let shared = Rc::new(RefCell::new(Counter(0)));
        let mut handle = Rc::clone(&shared);
        handle.queue_changed(&change(None, Some("A")));
        handle.queue_changed(&change(Some("A"), None));

        assert_eq!(shared.borrow().0, 2);
    }
}
