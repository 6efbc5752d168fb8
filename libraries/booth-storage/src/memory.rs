//! In-process origin
//!
//! Several [`MemoryStore`] handles opened from one [`MemoryOrigin`] behave
//! like tabs sharing `localStorage`: they see the same values, and each one
//! is told about writes made by the others.

use crate::error::Result;
use crate::events::{ExternalChanges, StorageEvent};
use crate::store::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::trace;

#[derive(Debug, Default)]
struct OriginState {
    values: HashMap<String, String>,
    next_context: u64,
    listeners: Vec<(u64, mpsc::UnboundedSender<StorageEvent>)>,
}

impl OriginState {
    /// Write and announce to every context except `writer`
    fn write(&mut self, writer: Option<u64>, key: &str, value: String) {
        let old_value = self.values.insert(key.to_string(), value.clone());
        if old_value.as_deref() == Some(value.as_str()) {
            return;
        }

        let event = StorageEvent {
            key: key.to_string(),
            old_value,
            new_value: Some(value),
        };
        self.listeners.retain(|(context, tx)| {
            if Some(*context) == writer {
                return !tx.is_closed();
            }
            tx.send(event.clone()).is_ok()
        });
    }
}

/// Shared value space for a set of contexts
#[derive(Debug, Clone, Default)]
pub struct MemoryOrigin {
    state: Arc<Mutex<OriginState>>,
}

impl MemoryOrigin {
    /// Create an empty origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new execution context on this origin
    pub fn open_context(&self) -> MemoryStore {
        let mut state = self.lock();
        let context = state.next_context;
        state.next_context += 1;
        trace!("Opened memory context {}", context);

        MemoryStore {
            origin: self.clone(),
            context,
        }
    }

    /// Write raw text as if from a context outside this process
    ///
    /// Every open context is notified. Used to simulate foreign or corrupt
    /// writes.
    pub fn inject(&self, key: &str, raw: impl Into<String>) {
        self.lock().write(None, key, raw.into());
    }

    /// Raw text currently stored at `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, OriginState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One execution context on a [`MemoryOrigin`]
#[derive(Debug, Clone)]
pub struct MemoryStore {
    origin: MemoryOrigin,
    context: u64,
}

impl MemoryStore {
    /// Origin this context belongs to
    pub fn origin(&self) -> &MemoryOrigin {
        &self.origin
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.origin.raw(key))
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.origin.lock().write(Some(self.context), key, value);
        Ok(())
    }

    fn subscribe(&self) -> Result<ExternalChanges> {
        let (tx, changes) = ExternalChanges::channel();
        self.origin.lock().listeners.push((self.context, tx));
        Ok(changes)
    }
}
