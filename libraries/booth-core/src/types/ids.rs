/// ID types for Booth entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Show identifier
///
/// Opaque to the queue: only equality, hashing and ordering matter. The
/// catalogue composes it from a series code and a show code
/// (`Sus-011-Hitch`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(String);

impl ShowId {
    /// Create a new show ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Series code, the text before the first `-`
    pub fn series(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ShowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ShowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ShowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
