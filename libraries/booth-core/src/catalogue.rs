//! Catalogue index
//!
//! The Archive is a static, read-only collection of shows. The queue only
//! consults it through [`Catalogue`]: validity checks, metadata lookup and the
//! full identifier list used for fuzzy suggestions.

use crate::error::{CoreError, Result};
use crate::types::{ShowId, ShowMetadata};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Read-only index of playable shows
pub trait Catalogue {
    /// Whether `id` names a show in the catalogue
    fn contains(&self, id: &ShowId) -> bool;

    /// Display metadata for `id`, if present
    fn resolve(&self, id: &ShowId) -> Option<ShowMetadata>;

    /// Every known identifier, in catalogue order
    fn ids(&self) -> Vec<ShowId>;
}

/// In-memory catalogue built from a fixed list of shows
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogue {
    shows: Vec<ShowMetadata>,
    index: HashMap<ShowId, usize>,
}

impl StaticCatalogue {
    /// Build a catalogue from shows, keeping the first entry for a repeated id
    pub fn from_shows(shows: impl IntoIterator<Item = ShowMetadata>) -> Self {
        let mut catalogue = Self::default();
        for show in shows {
            if catalogue.index.contains_key(&show.id) {
                warn!("Duplicate catalogue entry ignored: {}", show.id);
                continue;
            }
            catalogue
                .index
                .insert(show.id.clone(), catalogue.shows.len());
            catalogue.shows.push(show);
        }
        catalogue
    }

    /// Parse a JSON array of shows
    pub fn from_json_str(json: &str) -> Result<Self> {
        let shows: Vec<ShowMetadata> = serde_json::from_str(json)?;
        if shows.is_empty() {
            return Err(CoreError::catalogue("catalogue contains no shows"));
        }
        let catalogue = Self::from_shows(shows);
        debug!("Loaded catalogue with {} shows", catalogue.len());
        Ok(catalogue)
    }

    /// Load a JSON array of shows from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::catalogue(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// All shows in catalogue order
    pub fn shows(&self) -> &[ShowMetadata] {
        &self.shows
    }

    /// Shows whose id, series or title contains `needle` (case-insensitive)
    pub fn search<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a ShowMetadata> + 'a {
        let needle = needle.to_lowercase();
        self.shows.iter().filter(move |show| {
            needle.is_empty()
                || show.id.as_str().to_lowercase().contains(&needle)
                || show.series.to_lowercase().contains(&needle)
                || show.title.to_lowercase().contains(&needle)
        })
    }

    /// Number of shows
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Whether the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

impl Catalogue for StaticCatalogue {
    fn contains(&self, id: &ShowId) -> bool {
        self.index.contains_key(id)
    }

    fn resolve(&self, id: &ShowId) -> Option<ShowMetadata> {
        self.index.get(id).map(|&i| self.shows[i].clone())
    }

    fn ids(&self) -> Vec<ShowId> {
        self.shows.iter().map(|show| show.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> StaticCatalogue {
        StaticCatalogue::from_shows(vec![
            ShowMetadata::new("Sus-011-Hitch", "Suspense", "The Lodger").with_banger(true),
            ShowMetadata::new("XMin-003-Nightfall", "X Minus One", "Nightfall"),
            ShowMetadata::new("Esc-042-Leiningen", "Escape", "Leiningen Versus the Ants"),
        ])
    }

    #[test]
    fn contains_and_resolve() {
        let catalogue = sample();
        let id = ShowId::new("XMin-003-Nightfall");

        assert!(catalogue.contains(&id));
        assert_eq!(catalogue.resolve(&id).unwrap().title, "Nightfall");
        assert!(catalogue.resolve(&ShowId::new("XMin-004-Missing")).is_none());
    }

    #[test]
    fn ids_keep_catalogue_order() {
        let ids: Vec<String> = sample().ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["Sus-011-Hitch", "XMin-003-Nightfall", "Esc-042-Leiningen"]);
    }

    #[test]
    fn duplicate_entries_keep_first() {
        let catalogue = StaticCatalogue::from_shows(vec![
            ShowMetadata::new("A-1", "A", "First"),
            ShowMetadata::new("A-1", "A", "Second"),
        ]);
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.resolve(&ShowId::new("A-1")).unwrap().title, "First");
    }

    #[test]
    fn search_matches_series_and_title() {
        let catalogue = sample();
        let hits: Vec<_> = catalogue.search("escape").map(|s| s.id.to_string()).collect();
        assert_eq!(hits, vec!["Esc-042-Leiningen"]);

        let hits: Vec<_> = catalogue.search("LODGER").map(|s| s.id.to_string()).collect();
        assert_eq!(hits, vec!["Sus-011-Hitch"]);

        assert_eq!(catalogue.search("").count(), 3);
    }

    #[test]
    fn from_json_defaults_optional_fields() {
        let catalogue = StaticCatalogue::from_json_str(
            r#"[{"id": "Sus-011-Hitch", "series": "Suspense", "title": "The Lodger"}]"#,
        )
        .unwrap();

        let show = catalogue.resolve(&ShowId::new("Sus-011-Hitch")).unwrap();
        assert!(!show.banger);
        assert!(show.duration_secs.is_none());
        assert!(show.media_url.is_empty());
    }

    #[test]
    fn from_json_rejects_empty_and_garbage() {
        assert!(StaticCatalogue::from_json_str("[]").is_err());
        assert!(StaticCatalogue::from_json_str("not json").is_err());
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "Esc-042-Leiningen", "series": "Escape", "title": "Leiningen"}}]"#
        )
        .unwrap();

        let catalogue = StaticCatalogue::from_path(file.path()).unwrap();
        assert!(catalogue.contains(&ShowId::new("Esc-042-Leiningen")));

        let missing = StaticCatalogue::from_path("/nonexistent/archive.json");
        assert!(matches!(missing, Err(CoreError::Catalogue(_))));
    }
}
