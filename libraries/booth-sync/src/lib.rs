//! Booth Queue Sync
//!
//! Keeps the queue durable and consistent across every open context.
//!
//! - [`SnapshotWriter`] persists the queue order after each change
//! - [`restore`] rebuilds the queue at boot
//! - [`CrossContextSync`] rebuilds it again whenever another context writes
//!
//! # Example
//!
//! ```rust
//! use booth_core::{ShowId, ShowMetadata, StaticCatalogue};
//! use booth_playback::QueueStore;
//! use booth_storage::{keys, MemoryOrigin, PersistentStore};
//! use booth_sync::{CrossContextSync, SnapshotWriter, SyncOutcome};
//! use std::sync::Arc;
//!
//! let catalogue = Arc::new(StaticCatalogue::from_shows(vec![
//!     ShowMetadata::new("Sus-011-Hitch", "Suspense", "The Lodger"),
//! ]));
//! let origin = MemoryOrigin::new();
//!
//! // Tab A writes its queue
//! let mut tab_a = QueueStore::new(catalogue.clone());
//! let store_a = PersistentStore::new(origin.open_context());
//! tab_a.subscribe(SnapshotWriter::new(store_a, keys::QUEUE).unwrap());
//!
//! // Tab B follows it
//! let mut tab_b = QueueStore::new(catalogue);
//! let store_b = PersistentStore::new(origin.open_context());
//! let mut sync = CrossContextSync::new(&store_b, keys::QUEUE).unwrap();
//!
//! tab_a.add(&ShowId::new("Sus-011-Hitch")).unwrap();
//! assert_eq!(sync.pump(&mut tab_b), SyncOutcome::Resynced { len: 1 });
//! assert_eq!(tab_b.ids(), tab_a.ids());
//! ```

mod error;
mod snapshot;
mod sync;
mod types;

// Public exports
pub use error::{Result, SyncError};
pub use snapshot::{restore, SnapshotWriter};
pub use sync::CrossContextSync;
pub use types::SyncOutcome;
