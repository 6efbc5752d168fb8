use serde::{Deserialize, Serialize};

/// What applying external changes did to the local queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Nothing pending, or the stored snapshot already matches the queue
    Unchanged,
    /// Queue rebuilt from another context's snapshot
    Resynced { len: usize },
    /// Only keys other than the queue changed
    Ignored,
}
