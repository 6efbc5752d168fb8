//! Booth Storage
//!
//! Durable, origin-scoped key-value storage shared by every execution context
//! (tab, window, process) of one Booth installation.
//!
//! # Architecture
//!
//! - **Backends** implement [`KeyValueStore`]: raw string get/set plus a
//!   subscription to writes made by *other* contexts.
//! - **Adapter**: [`PersistentStore`] layers JSON encoding on top. Reads never
//!   fail: absent or corrupt values fall back to the caller's default.
//! - **Transport**: change notifications arrive on an [`ExternalChanges`]
//!   subscription, so the queue never needs to know whether they came from a
//!   browser `storage` event, a filesystem watcher or an in-process origin.
//!
//! Writes are last-writer-wins. There is no optimistic concurrency.
//!
//! # Example
//!
//! ```rust
//! use booth_storage::{keys, MemoryOrigin, PersistentStore};
//!
//! let origin = MemoryOrigin::new();
//! let tab_a = PersistentStore::new(origin.open_context());
//! let tab_b = PersistentStore::new(origin.open_context());
//!
//! let mut changes = tab_b.subscribe().unwrap();
//! tab_a.store(keys::QUEUE, &vec!["Sus-011-Hitch"]).unwrap();
//!
//! let event = changes.try_next().unwrap();
//! assert_eq!(event.key, keys::QUEUE);
//! assert_eq!(tab_b.retrieve(keys::QUEUE, Vec::<String>::new()), vec!["Sus-011-Hitch"]);
//! ```

mod error;
mod events;
mod memory;
mod store;

#[cfg(feature = "file")]
mod file;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub mod keys;

pub use error::{Result, StorageError};
pub use events::{ExternalChanges, StorageEvent};
pub use memory::{MemoryOrigin, MemoryStore};
pub use store::{KeyValueStore, PersistentStore};

#[cfg(feature = "file")]
pub use file::FileStore;
