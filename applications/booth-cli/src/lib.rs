//! Booth CLI Library
//!
//! Command-line front end for the Booth listening room queue. Each invocation
//! is one execution context sharing a data directory with every other.
//!
//! This library exposes the command implementations for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types for convenience
pub use config::BoothConfig;
pub use error::{CliError, Result};
pub use session::Session;
