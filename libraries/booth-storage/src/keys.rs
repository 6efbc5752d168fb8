//! Storage key constants
//!
//! Every key lives in the same origin-scoped namespace. The queue snapshot
//! key is kept apart from settings so a theme change never looks like a queue
//! change to other contexts.

/// Queue snapshot: JSON array of show identifiers
pub const QUEUE: &str = "booth.queue";

/// Player settings (autoplay, volume)
pub const SETTINGS: &str = "booth.settings";

/// UI theme and font selection
pub const THEME: &str = "booth.theme";

/// Cached broadcast schedule
pub const SCHEDULE: &str = "booth.schedule";

/// Whether `key` can be stored by every backend
///
/// Keys become file names in the file backend, so only ASCII letters,
/// digits, `.`, `_` and `-` are accepted.
pub fn is_valid(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
