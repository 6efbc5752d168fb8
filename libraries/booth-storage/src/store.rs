//! Typed persistence on top of a raw key-value backend

use crate::error::Result;
use crate::events::ExternalChanges;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Raw, origin-scoped string store
///
/// One value of an implementing type is one execution context: writes made
/// through it are announced to every *other* context's subscription, never
/// to its own.
pub trait KeyValueStore {
    /// Read the raw value stored at `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value at `key`
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Subscribe to writes made by other contexts
    fn subscribe(&self) -> Result<ExternalChanges>;
}

/// JSON adapter over a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct PersistentStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    /// Wrap a backend
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Parsed value at `key`, or `default` when absent or unreadable
    ///
    /// Never fails: a corrupt value is logged and treated as absent.
    pub fn retrieve<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring corrupt value stored at {}: {}", key, e);
                default
            }
        }
    }

    /// Serialize `value` and overwrite whatever is stored at `key`
    pub fn store<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, raw)
    }

    /// Subscribe to writes made by other contexts
    pub fn subscribe(&self) -> Result<ExternalChanges> {
        self.backend.subscribe()
    }

    /// Underlying backend
    pub fn backend(&self) -> &S {
        &self.backend
    }
}
