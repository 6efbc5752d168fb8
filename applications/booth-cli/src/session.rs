/// One execution context: catalogue, stored queue and its observers
use crate::config::BoothConfig;
use crate::error::Result;
use booth_core::StaticCatalogue;
use booth_importer::{FuzzyMatcher, Importer};
use booth_playback::{ControlSync, LoggingMedia, PlaybackDriver, QueueStore, RecordingControls};
use booth_storage::{FileStore, PersistentStore};
use booth_sync::{restore, CrossContextSync, SnapshotWriter};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, info};

/// Archive shipped with the binary
pub const DEMO_ARCHIVE: &str = include_str!("../assets/archive.json");

pub struct Session {
    pub config: BoothConfig,
    pub catalogue: Arc<StaticCatalogue>,
    pub store: PersistentStore<FileStore>,
    pub queue: QueueStore,
    pub controls: Rc<RefCell<ControlSync<RecordingControls>>>,
    pub driver: Rc<RefCell<PlaybackDriver<LoggingMedia>>>,
}

impl Session {
    /// Load the catalogue and restore the stored queue
    pub fn open(config: BoothConfig) -> Result<Self> {
        let catalogue = Arc::new(match &config.catalogue.path {
            Some(path) => StaticCatalogue::from_path(path)?,
            None => StaticCatalogue::from_json_str(DEMO_ARCHIVE)?,
        });
        info!("Archive loaded: {} shows", catalogue.len());

        let store = PersistentStore::new(FileStore::open(&config.storage.dir)?);

        let mut queue = QueueStore::new(catalogue.clone());
        let controls = Rc::new(RefCell::new(ControlSync::new(RecordingControls::new())));
        let driver = Rc::new(RefCell::new(PlaybackDriver::new(
            LoggingMedia::new(),
            config.playback_settings(),
        )));
        queue.subscribe(Rc::clone(&controls));
        queue.subscribe(Rc::clone(&driver));

        restore(&store, &config.storage.queue_key, &mut queue);

        // Subscribed after restore so read-only commands never write
        queue.subscribe(SnapshotWriter::new(
            store.clone(),
            config.storage.queue_key.clone(),
        )?);
        debug!("Session ready with {} queued shows", queue.len());

        Ok(Self {
            config,
            catalogue,
            store,
            queue,
            controls,
            driver,
        })
    }

    /// Importer using the configured suggestion threshold
    pub fn importer(&self) -> Importer {
        Importer::with_matcher(FuzzyMatcher::with_threshold(
            self.config.import.suggestion_threshold,
        ))
    }

    /// Follow queue writes made by other contexts
    pub fn follow(&self) -> Result<CrossContextSync> {
        Ok(CrossContextSync::new(
            &self.store,
            self.config.storage.queue_key.clone(),
        )?)
    }
}
