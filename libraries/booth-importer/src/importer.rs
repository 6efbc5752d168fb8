//! Import orchestration
//!
//! Validates a submitted buffer against the catalogue and applies it to the
//! queue all at once, or not at all.

use crate::buffer::{parse_buffer, render_line, ImportRequest};
use crate::fuzzy::FuzzyMatcher;
use crate::{ImportError, Result};
use booth_core::ShowId;
use booth_playback::QueueStore;
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// Outcome of an applied import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSummary {
    /// Empty submission emptied the queue
    Cleared,

    /// Queue replaced with `count` shows
    Replaced { count: usize },
}

/// One rejected buffer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    /// Identifier as submitted
    pub id: ShowId,

    /// Closest catalogue identifier, when one is close enough
    pub suggestion: Option<ShowId>,
}

impl fmt::Display for InvalidLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suggestion {
            Some(suggestion) => write!(f, "{} -> {}", self.id, suggestion),
            None => write!(f, "{} -> no match", self.id),
        }
    }
}

/// Everything the user needs to fix a rejected import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Rejected lines in buffer order
    pub invalid: Vec<InvalidLine>,

    /// Buffer re-rendered with rejected lines annotated
    pub buffer: String,
}

/// Applies import buffers to a queue
#[derive(Debug, Clone, Copy, Default)]
pub struct Importer {
    matcher: FuzzyMatcher,
}

impl Importer {
    /// Create an importer with the default suggestion threshold
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matcher(matcher: FuzzyMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Apply a submitted buffer to `queue`
    ///
    /// Blank text clears the queue. Otherwise every identifier must be in
    /// the catalogue; if any is not, the queue is left exactly as it was and
    /// the report carries suggestions plus the annotated buffer.
    pub fn import(&self, text: &str, queue: &mut QueueStore) -> Result<ImportSummary> {
        let ids = match parse_buffer(text) {
            ImportRequest::Clear => {
                queue.clear();
                info!("Import cleared the queue");
                return Ok(ImportSummary::Cleared);
            }
            ImportRequest::Replace(ids) => ids,
        };

        let catalogue = queue.catalogue();
        let invalid: Vec<&ShowId> = ids.iter().filter(|id| !catalogue.contains(id)).collect();
        if !invalid.is_empty() {
            let report = self.report(&ids, &invalid, &catalogue.ids());
            info!("Import rejected: {} invalid of {}", report.invalid.len(), ids.len());
            return Err(ImportError::Rejected(report));
        }

        let count = ids.len();
        queue.import_replace(ids)?;
        info!("Imported {} shows", count);
        Ok(ImportSummary::Replaced { count })
    }

    fn report(&self, ids: &[ShowId], invalid: &[&ShowId], known: &[ShowId]) -> ImportReport {
        let suggestions: HashMap<&ShowId, Option<ShowId>> = invalid
            .iter()
            .map(|id| {
                let suggestion = self
                    .matcher
                    .best_match(id.as_str(), known)
                    .map(|found| found.id);
                (*id, suggestion)
            })
            .collect();

        let buffer = ids
            .iter()
            .map(|id| match suggestions.get(id) {
                Some(suggestion) => render_line(id, true, suggestion.as_ref()),
                None => render_line(id, false, None),
            })
            .collect::<Vec<_>>()
            .join("\n");

        let invalid = invalid
            .iter()
            .map(|id| InvalidLine {
                id: (*id).clone(),
                suggestion: suggestions.get(id).cloned().flatten(),
            })
            .collect();

        ImportReport { invalid, buffer }
    }
}
