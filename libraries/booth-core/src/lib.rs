//! Booth Core
//!
//! Identifiers, catalogue access and error handling shared by every Booth crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `ShowId`, `ShowMetadata`
//! - **Core Traits**: `Catalogue`, the read-only index of playable shows
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use booth_core::{Catalogue, ShowId, ShowMetadata, StaticCatalogue};
//!
//! let catalogue = StaticCatalogue::from_shows(vec![
//!     ShowMetadata::new("Sus-011-Hitch", "Suspense", "The Lodger"),
//! ]);
//!
//! assert!(catalogue.contains(&ShowId::new("Sus-011-Hitch")));
//! assert!(!catalogue.contains(&ShowId::new("Sus-999-Nope")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalogue;
/// Error types
pub mod error;
/// Domain types
pub mod types;

// Re-export commonly used types
pub use catalogue::{Catalogue, StaticCatalogue};
pub use error::{CoreError, Result};
pub use types::{ShowId, ShowMetadata};
