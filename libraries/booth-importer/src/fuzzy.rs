//! Fuzzy matching of mistyped show identifiers

use booth_core::ShowId;
use serde::{Deserialize, Serialize};
use strsim::jaro;

/// Default similarity a candidate must exceed to be suggested
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Best catalogue candidate for an unknown identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// Suggested identifier
    pub id: ShowId,

    /// Jaro similarity in `[0, 1]`
    pub score: f64,
}

/// Suggests the closest known identifier for a typo
///
/// Catches single-character slips and case mismatches while refusing to
/// suggest anything for input that is simply foreign.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FuzzyMatcher {
    /// Create a matcher with the default threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher reporting only scores above `threshold`
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Similarity of two identifiers, ignoring case
    pub fn score(&self, a: &str, b: &str) -> f64 {
        jaro(&normalize_id(a), &normalize_id(b))
    }

    /// Highest-scoring candidate strictly above the threshold
    ///
    /// Ties keep the earliest candidate.
    pub fn best_match<'a>(
        &self,
        needle: &str,
        candidates: impl IntoIterator<Item = &'a ShowId>,
    ) -> Option<FuzzyMatch> {
        let needle = normalize_id(needle);
        let mut best: Option<(&ShowId, f64)> = None;

        for candidate in candidates {
            let score = jaro(&needle, &normalize_id(candidate.as_str()));
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }

        best.filter(|(_, score)| *score > self.threshold)
            .map(|(id, score)| FuzzyMatch {
                id: id.clone(),
                score,
            })
    }
}

fn normalize_id(s: &str) -> String {
    s.trim().to_lowercase()
}
