/// Show domain type
use crate::types::ShowId;
use serde::{Deserialize, Serialize};

/// Display metadata for one catalogue entry
///
/// Resolved once when a show enters the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMetadata {
    /// Unique show identifier
    pub id: ShowId,

    /// Series name ("Suspense", "X Minus One", ...)
    pub series: String,

    /// Episode title
    pub title: String,

    /// Location of the audio resource
    #[serde(default)]
    pub media_url: String,

    /// Running time in seconds, when known
    #[serde(default)]
    pub duration_secs: Option<u32>,

    /// Highlighted-quality flag
    #[serde(default)]
    pub banger: bool,
}

impl ShowMetadata {
    /// Create show metadata with no media location
    pub fn new(id: impl Into<ShowId>, series: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            series: series.into(),
            title: title.into(),
            media_url: String::new(),
            duration_secs: None,
            banger: false,
        }
    }

    /// Set the media location
    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = url.into();
        self
    }

    /// Mark as a banger
    pub fn with_banger(mut self, banger: bool) -> Self {
        self.banger = banger;
        self
    }

    /// Set the running time
    pub fn with_duration_secs(mut self, secs: u32) -> Self {
        self.duration_secs = Some(secs);
        self
    }
}
