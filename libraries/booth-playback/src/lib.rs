//! Booth - Queue Management
//!
//! The playback queue for the Booth listening room.
//!
//! This crate provides:
//! - The queue store (add, remove, reorder, shuffle, clear, replace)
//! - Change notification delivered to every observer after each mutation
//! - Catalogue control reflection (queued / not queued toggles)
//! - The playback driver that keeps the media element on the queue head
//!
//! # Architecture
//!
//! `booth-playback` knows nothing about persistence or rendering:
//! - No dependency on booth-storage
//! - Catalogue access goes through the [`Catalogue`](booth_core::Catalogue) trait
//! - Views, controls, media and persistence are [`QueueObserver`]s
//!
//! # Example: Basic Queue
//!
//! ```rust
//! use booth_core::{ShowId, ShowMetadata, StaticCatalogue};
//! use booth_playback::{QueueStore, QueueState};
//! use std::sync::Arc;
//!
//! let catalogue = Arc::new(StaticCatalogue::from_shows(vec![
//!     ShowMetadata::new("Sus-011-Hitch", "Suspense", "The Lodger"),
//!     ShowMetadata::new("XMin-003-Nightfall", "X Minus One", "Nightfall"),
//! ]));
//!
//! let mut queue = QueueStore::new(catalogue);
//! queue.add(&ShowId::new("Sus-011-Hitch")).unwrap();
//! queue.add(&ShowId::new("XMin-003-Nightfall")).unwrap();
//!
//! // Re-adding moves a show to the tail
//! queue.add(&ShowId::new("Sus-011-Hitch")).unwrap();
//! assert_eq!(queue.head().unwrap().id.as_str(), "XMin-003-Nightfall");
//! assert_eq!(queue.state(), QueueState::NonEmpty);
//! ```
//!
//! # Example: Driving Playback
//!
//! ```rust
//! use booth_core::{ShowId, ShowMetadata, StaticCatalogue};
//! use booth_playback::{media_ended, LoggingMedia, PlaybackDriver, PlaybackSettings, QueueStore};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::sync::Arc;
//!
//! let catalogue = Arc::new(StaticCatalogue::from_shows(vec![
//!     ShowMetadata::new("A-1", "A", "First"),
//!     ShowMetadata::new("A-2", "A", "Second"),
//! ]));
//! let mut queue = QueueStore::new(catalogue);
//!
//! let driver = Rc::new(RefCell::new(PlaybackDriver::new(
//!     LoggingMedia::new(),
//!     PlaybackSettings::default(),
//! )));
//! queue.subscribe(Rc::clone(&driver));
//!
//! queue.add(&ShowId::new("A-1")).unwrap();
//! queue.add(&ShowId::new("A-2")).unwrap();
//!
//! let ended = media_ended(&mut queue, &driver);
//! assert_eq!(ended, Some(ShowId::new("A-1")));
//! assert_eq!(driver.borrow().loaded(), Some(&ShowId::new("A-2")));
//! ```

#![forbid(unsafe_code)]

pub mod controls;
pub mod driver;
pub mod error;
pub mod events;
pub mod queue;
pub mod shuffle;
pub mod types;

pub use controls::{CatalogueControls, ControlSync, RecordingControls};
pub use driver::{media_ended, LoggingMedia, MediaCall, MediaElement, PlaybackDriver};
pub use error::{PlaybackError, Result};
pub use events::{ChangeKind, QueueChange, QueueObserver};
pub use queue::QueueStore;
pub use types::{PlaybackSettings, QueueEntry, QueueState};
