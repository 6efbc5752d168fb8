/// Booth configuration
use crate::error::{CliError, Result};
use booth_storage::keys;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoothConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default)]
    pub catalogue: CatalogueSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSection,

    #[serde(default = "default_import")]
    pub import: ImportSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_queue_key")]
    pub queue_key: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogueSettings {
    /// JSON archive to load instead of the built-in one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSection {
    #[serde(default = "default_continuous")]
    pub continuous: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportSettings {
    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: f64,
}

impl BoothConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `booth.toml` in the working
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("booth.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. BOOTH_STORAGE__QUEUE_KEY
        settings = settings.add_source(
            config::Environment::with_prefix("BOOTH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let threshold = self.import.suggestion_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(CliError::Config(format!(
                "import.suggestion_threshold must be in (0, 1], got {}",
                threshold
            )));
        }

        if !keys::is_valid(&self.storage.queue_key) {
            return Err(CliError::Config(format!(
                "storage.queue_key {:?} is not a usable key",
                self.storage.queue_key
            )));
        }

        if let Some(path) = &self.catalogue.path {
            if !path.is_file() {
                return Err(CliError::Config(format!(
                    "Catalogue not found at {:?}",
                    path
                )));
            }
        }

        Ok(())
    }

    /// Playback settings for the driver
    pub fn playback_settings(&self) -> booth_playback::PlaybackSettings {
        booth_playback::PlaybackSettings {
            continuous: self.playback.continuous,
        }
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        dir: default_storage_dir(),
        queue_key: default_queue_key(),
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./data/booth")
}

fn default_queue_key() -> String {
    keys::QUEUE.to_string()
}

fn default_playback() -> PlaybackSection {
    PlaybackSection {
        continuous: default_continuous(),
    }
}

fn default_continuous() -> bool {
    true
}

fn default_import() -> ImportSettings {
    ImportSettings {
        suggestion_threshold: default_suggestion_threshold(),
    }
}

fn default_suggestion_threshold() -> f64 {
    booth_importer::DEFAULT_THRESHOLD
}

impl Default for BoothConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            catalogue: CatalogueSettings::default(),
            playback: default_playback(),
            import: default_import(),
        }
    }
}
