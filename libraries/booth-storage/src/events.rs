//! Cross-context change notifications

use tokio::sync::mpsc;

/// A write made by another context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// Key that changed
    pub key: String,
    /// Value before the write, as last seen by the receiving context
    pub old_value: Option<String>,
    /// Value after the write; `None` when the key was removed
    pub new_value: Option<String>,
}

/// Subscription to writes made by other contexts
///
/// Delivery is best-effort: events written while nobody listens are not
/// replayed. Dropping the subscription unregisters it on the next write.
#[derive(Debug)]
pub struct ExternalChanges {
    rx: mpsc::UnboundedReceiver<StorageEvent>,
}

impl ExternalChanges {
    pub(crate) fn channel() -> (mpsc::UnboundedSender<StorageEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Next pending event without waiting
    pub fn try_next(&mut self) -> Option<StorageEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event; `None` once the backend has gone away
    pub async fn next(&mut self) -> Option<StorageEvent> {
        self.rx.recv().await
    }

    /// Take every pending event
    pub fn drain(&mut self) -> Vec<StorageEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_next() {
            events.push(event);
        }
        events
    }
}

/// Fan-out list of live subscriptions
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<mpsc::UnboundedSender<StorageEvent>>,
}

impl Subscribers {
    pub(crate) fn register(&mut self) -> ExternalChanges {
        let (tx, changes) = ExternalChanges::channel();
        self.senders.push(tx);
        changes
    }

    /// Send to every subscriber, forgetting the ones that hung up
    pub(crate) fn publish(&mut self, event: &StorageEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
