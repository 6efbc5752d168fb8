//! Directory-backed origin
//!
//! Each key is stored as `<key>.json` inside one directory. Every process that
//! opens the directory is a separate context; writes by one are picked up by
//! the others through filesystem change notification.
//!
//! # Platform Support
//!
//! - Windows: `ReadDirectoryChangesW`
//! - macOS: `FSEvents`
//! - Linux: `inotify`

use crate::error::{Result, StorageError};
use crate::events::{ExternalChanges, StorageEvent, Subscribers};
use crate::keys;
use crate::store::KeyValueStore;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

const EXTENSION: &str = ".json";

/// State shared with the watcher thread
#[derive(Debug, Default)]
struct Shared {
    /// Last value this context read, wrote or was told about, per key
    known: Mutex<HashMap<String, Option<String>>>,
    subscribers: Mutex<Subscribers>,
}

struct Inner {
    dir: PathBuf,
    shared: Arc<Shared>,
    // Owns the OS watch; dropping it stops notifications
    watcher: Mutex<Option<RecommendedWatcher>>,
}

/// One execution context on a storage directory
#[derive(Clone)]
pub struct FileStore {
    inner: Arc<Inner>,
}

impl fmt::Debug for FileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore")
            .field("dir", &self.inner.dir)
            .finish_non_exhaustive()
    }
}

impl FileStore {
    /// Open (creating if needed) a storage directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        fs::create_dir_all(dir.as_ref())?;
        // Watcher events carry absolute paths
        let dir = fs::canonicalize(dir.as_ref())?;
        debug!("Opened file store at {}", dir.display());

        Ok(Self {
            inner: Arc::new(Inner {
                dir,
                shared: Arc::new(Shared::default()),
                watcher: Mutex::new(None),
            }),
        })
    }

    /// Storage directory
    pub fn dir(&self) -> &Path {
        &self.inner.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if !keys::is_valid(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.inner.dir.join(format!("{key}{EXTENSION}")))
    }

    fn ensure_watching(&self) -> Result<()> {
        let mut slot = lock(&self.inner.watcher);
        if slot.is_some() {
            return Ok(());
        }

        let shared = Arc::clone(&self.inner.shared);
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            handle_fs_event(&shared, result);
        })?;
        watcher.watch(&self.inner.dir, RecursiveMode::NonRecursive)?;
        debug!("Watching {} for external changes", self.inner.dir.display());

        *slot = Some(watcher);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let value = match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        lock(&self.inner.shared.known).insert(key.to_string(), value.clone());
        Ok(value)
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        // Recorded first so our own watcher recognises the write
        lock(&self.inner.shared.known).insert(key.to_string(), Some(value.clone()));

        let tmp = self
            .inner
            .dir
            .join(format!(".{key}{EXTENSION}.{}.tmp", std::process::id()));
        fs::write(&tmp, value.as_bytes())?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn subscribe(&self) -> Result<ExternalChanges> {
        self.ensure_watching()?;
        Ok(lock(&self.inner.shared.subscribers).register())
    }
}

/// Storage key for a file in the store directory, if it is one
fn key_for_path(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let key = name.strip_suffix(EXTENSION)?;
    keys::is_valid(key).then(|| key.to_string())
}

fn handle_fs_event(shared: &Shared, result: notify::Result<Event>) {
    let event = match result {
        Ok(event) => event,
        Err(e) => {
            warn!("Storage watcher error: {}", e);
            return;
        }
    };
    if matches!(event.kind, EventKind::Access(_)) {
        return;
    }

    for path in &event.paths {
        let Some(key) = key_for_path(path) else {
            continue;
        };

        let new_value = match fs::read_to_string(path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read changed key {}: {}", key, e);
                continue;
            }
        };

        let old_value = {
            let mut known = lock(&shared.known);
            // Our own write, or a change we already reported
            if known.get(&key) == Some(&new_value) {
                continue;
            }
            known.insert(key.clone(), new_value.clone()).flatten()
        };

        debug!("External change to {}", key);
        lock(&shared.subscribers).publish(&StorageEvent {
            key,
            old_value,
            new_value,
        });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
