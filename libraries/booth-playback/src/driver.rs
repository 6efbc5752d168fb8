//! Playback driver
//!
//! Keeps the media element pointed at the queue head. The driver never edits
//! the queue itself except through [`media_ended`], which removes the show that
//! just finished so the next one becomes head.

use crate::events::{QueueChange, QueueObserver};
use crate::queue::QueueStore;
use crate::types::{PlaybackSettings, QueueState};
use booth_core::{ShowId, ShowMetadata};
use std::cell::RefCell;
use tracing::{debug, info};

/// Audio element the driver controls
pub trait MediaElement {
    /// Point the element at a new show, superseding any pending load
    fn load(&mut self, show: &ShowMetadata);

    /// Drop the current source
    fn unload(&mut self);

    /// Rewind the transport position to zero
    fn reset_transport(&mut self);

    /// Show or hide the transport controls
    fn set_transport_visible(&mut self, visible: bool);

    /// Start playing the loaded show
    fn play(&mut self);
}

/// Queue observer that loads the head into a [`MediaElement`]
#[derive(Debug)]
pub struct PlaybackDriver<M> {
    media: M,
    settings: PlaybackSettings,
    loaded: Option<ShowId>,
    advancing: bool,
}

impl<M: MediaElement> PlaybackDriver<M> {
    /// Driver for an element with nothing loaded and transport hidden
    pub fn new(media: M, settings: PlaybackSettings) -> Self {
        Self {
            media,
            settings,
            loaded: None,
            advancing: false,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    /// Update settings; takes effect on the next end-of-media advance
    pub fn set_settings(&mut self, settings: PlaybackSettings) {
        self.settings = settings;
    }

    /// Show currently loaded into the element
    pub fn loaded(&self) -> Option<&ShowId> {
        self.loaded.as_ref()
    }

    /// Media reported end of playback
    ///
    /// Returns the show that ended; the caller removes it from the queue.
    /// The head that replaces it auto-plays when `continuous` is set.
    pub fn finished(&mut self) -> Option<ShowId> {
        let ended = self.loaded.clone()?;
        self.advancing = true;
        Some(ended)
    }

    /// End an advance started by [`finished`](Self::finished)
    pub fn settle(&mut self) {
        self.advancing = false;
    }
}

impl<M: MediaElement> QueueObserver for PlaybackDriver<M> {
    fn queue_changed(&mut self, change: &QueueChange) {
        if change.state_changed() {
            self.media
                .set_transport_visible(change.state == QueueState::NonEmpty);
        }

        match &change.head {
            None => {
                if let Some(previous) = self.loaded.take() {
                    debug!("Queue empty, unloading {}", previous);
                    self.media.unload();
                }
            }
            Some(head) if self.loaded.as_ref() == Some(&head.id) => {}
            Some(head) => {
                debug!("Loading new head {}", head.id);
                self.media.load(&head.show);
                self.media.reset_transport();
                self.loaded = Some(head.id.clone());

                if self.advancing && self.settings.continuous {
                    self.media.play();
                }
            }
        }
    }
}

/// Handle end-of-media: remove the finished show and advance
///
/// The driver must be subscribed to `queue`, which is why it is passed
/// behind a `RefCell` and only borrowed around the removal.
pub fn media_ended<M: MediaElement>(
    queue: &mut QueueStore,
    driver: &RefCell<PlaybackDriver<M>>,
) -> Option<ShowId> {
    let ended = driver.borrow_mut().finished()?;
    info!("Finished {}", ended);
    queue.remove(&ended);
    driver.borrow_mut().settle();
    Some(ended)
}

/// One call made on a [`LoggingMedia`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCall {
    Load(ShowId),
    Unload,
    ResetTransport,
    TransportVisible(bool),
    Play,
}

/// Headless media element that logs and records every call
#[derive(Debug, Clone, Default)]
pub struct LoggingMedia {
    calls: Vec<MediaCall>,
}

impl LoggingMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> &[MediaCall] {
        &self.calls
    }

    /// Number of loads received
    pub fn load_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, MediaCall::Load(_)))
            .count()
    }
}

impl MediaElement for LoggingMedia {
    fn load(&mut self, show: &ShowMetadata) {
        info!("Loading {} ({}: {})", show.id, show.series, show.title);
        self.calls.push(MediaCall::Load(show.id.clone()));
    }

    fn unload(&mut self) {
        info!("Unloading media");
        self.calls.push(MediaCall::Unload);
    }

    fn reset_transport(&mut self) {
        debug!("Transport reset");
        self.calls.push(MediaCall::ResetTransport);
    }

    fn set_transport_visible(&mut self, visible: bool) {
        debug!("Transport visible: {}", visible);
        self.calls.push(MediaCall::TransportVisible(visible));
    }

    fn play(&mut self) {
        info!("Playing");
        self.calls.push(MediaCall::Play);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ChangeKind;
    use crate::types::QueueEntry;

    fn change(previous: Option<&str>, head: Option<&str>) -> QueueChange {
        let state = |id: Option<&str>| {
            if id.is_some() {
                QueueState::NonEmpty
            } else {
                QueueState::Empty
            }
        };
        QueueChange {
            kind: ChangeKind::Shuffled,
            selected: Vec::new(),
            unselected: Vec::new(),
            previous_head: previous.map(ShowId::from),
            head: head.map(|id| QueueEntry::new(ShowMetadata::new(id, "Series", "Title"))),
            previous_state: state(previous),
            state: state(head),
            snapshot: Vec::new(),
        }
    }

    #[test]
    fn first_head_loads_and_shows_transport() {
        let mut driver = PlaybackDriver::new(LoggingMedia::new(), PlaybackSettings::default());
        driver.queue_changed(&change(None, Some("A")));

        assert_eq!(
            driver.media().calls(),
            &[
                MediaCall::TransportVisible(true),
                MediaCall::Load(ShowId::new("A")),
                MediaCall::ResetTransport,
            ]
        );
        assert_eq!(driver.loaded(), Some(&ShowId::new("A")));
    }

    #[test]
    fn same_head_does_not_reload() {
        let mut driver = PlaybackDriver::new(LoggingMedia::new(), PlaybackSettings::default());
        driver.queue_changed(&change(None, Some("A")));
        driver.queue_changed(&change(Some("A"), Some("A")));

        assert_eq!(driver.media().load_count(), 1);
    }

    #[test]
    fn empty_queue_unloads_and_hides_transport() {
        let mut driver = PlaybackDriver::new(LoggingMedia::new(), PlaybackSettings::default());
        driver.queue_changed(&change(None, Some("A")));
        driver.queue_changed(&change(Some("A"), None));

        let calls = driver.media().calls();
        assert!(calls.ends_with(&[MediaCall::TransportVisible(false), MediaCall::Unload]));
        assert!(driver.loaded().is_none());
    }

    #[test]
    fn finished_without_load_is_none() {
        let mut driver = PlaybackDriver::new(LoggingMedia::new(), PlaybackSettings::default());
        assert!(driver.finished().is_none());
    }

    #[test]
    fn user_head_change_does_not_autoplay() {
        let mut driver = PlaybackDriver::new(LoggingMedia::new(), PlaybackSettings::default());
        driver.queue_changed(&change(None, Some("A")));
        driver.queue_changed(&change(Some("A"), Some("B")));

        assert!(!driver.media().calls().contains(&MediaCall::Play));
    }
}
