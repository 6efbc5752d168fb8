//! Shared helpers for CLI tests

use booth_cli::{BoothConfig, Session};
use std::path::Path;

/// Config pointing at a throwaway data directory
pub fn config_in(dir: &Path) -> BoothConfig {
    let mut config = BoothConfig::default();
    config.storage.dir = dir.to_path_buf();
    config
}

/// Open a new context on `dir`, as a separate `booth` invocation would
pub fn open(dir: &Path) -> Session {
    Session::open(config_in(dir)).unwrap()
}

/// Run a command against a buffer and return what it printed
pub fn run<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> booth_cli::Result<()>,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}
