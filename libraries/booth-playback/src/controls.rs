//! Catalogue controls
//!
//! Each catalogue entry has a toggle showing whether the show is queued. The
//! toggles are never updated directly; [`ControlSync`] applies the
//! selected/unselected sets from each committed change.

use crate::events::{QueueChange, QueueObserver};
use booth_core::ShowId;
use std::collections::BTreeSet;

/// Per-show queued indicator in the catalogue view
pub trait CatalogueControls {
    /// Mark a show as queued or not
    fn set_selected(&mut self, id: &ShowId, selected: bool);
}

/// Observer keeping catalogue controls in step with the queue
#[derive(Debug, Default)]
pub struct ControlSync<C> {
    controls: C,
}

impl<C: CatalogueControls> ControlSync<C> {
    pub fn new(controls: C) -> Self {
        Self { controls }
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn into_inner(self) -> C {
        self.controls
    }
}

impl<C: CatalogueControls> QueueObserver for ControlSync<C> {
    fn queue_changed(&mut self, change: &QueueChange) {
        for id in &change.unselected {
            self.controls.set_selected(id, false);
        }
        for id in &change.selected {
            self.controls.set_selected(id, true);
        }
    }
}

/// Controls that simply remember which shows are marked
///
/// Used by headless front ends and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingControls {
    selected: BTreeSet<ShowId>,
}

impl RecordingControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &ShowId) -> bool {
        self.selected.contains(id)
    }

    /// Marked shows in identifier order
    pub fn selected(&self) -> impl Iterator<Item = &ShowId> {
        self.selected.iter()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl CatalogueControls for RecordingControls {
    fn set_selected(&mut self, id: &ShowId, selected: bool) {
        if selected {
            self.selected.insert(id.clone());
        } else {
            self.selected.remove(id);
        }
    }
}
