//! Booth Queue Import/Export
//!
//! Moves the queue in and out of a plain-text edit buffer.
//!
//! # Features
//!
//! - Export the queue as newline-separated identifiers
//! - Parse edited buffers (blank lines, whitespace and annotations ignored)
//! - All-or-nothing import validated against the catalogue
//! - Typo suggestions for rejected identifiers (Jaro similarity)
//!
//! # Architecture
//!
//! - `buffer`: Text format, parsing and line annotation
//! - `fuzzy`: Closest-identifier suggestions
//! - `importer`: Validation and application to the queue
//!
//! # Example
//!
//! ```rust
//! use booth_core::{ShowMetadata, StaticCatalogue};
//! use booth_importer::{export, ImportError, Importer};
//! use booth_playback::QueueStore;
//! use std::sync::Arc;
//!
//! let catalogue = Arc::new(StaticCatalogue::from_shows(vec![
//!     ShowMetadata::new("Sus-011-Hitch", "Suspense", "The Lodger"),
//!     ShowMetadata::new("Sus-012-Welles", "Suspense", "Donovan's Brain"),
//! ]));
//! let mut queue = QueueStore::new(catalogue);
//! let importer = Importer::new();
//!
//! importer.import("Sus-012-Welles\nSus-011-Hitch", &mut queue).unwrap();
//! assert_eq!(export(&queue), "Sus-012-Welles\nSus-011-Hitch");
//!
//! match importer.import("Suspnse-011-Hitch", &mut queue) {
//!     Err(ImportError::Rejected(report)) => {
//!         assert_eq!(report.invalid[0].suggestion.as_ref().unwrap().as_str(), "Sus-011-Hitch");
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

mod error;

pub mod buffer;
pub mod fuzzy;
pub mod importer;

pub use buffer::{export, parse_buffer, ImportRequest, ANNOTATION_MARKER};
pub use error::ImportError;
pub use fuzzy::{FuzzyMatch, FuzzyMatcher, DEFAULT_THRESHOLD};
pub use importer::{ImportReport, ImportSummary, Importer, InvalidLine};

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;
