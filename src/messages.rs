use std::sync::{Arc, Mutex};

/// Append-only, in-memory log of what the app has been doing.
///
/// Every consumer holds a clone of the same handle; there is no ambient
/// singleton. Entries are ordered, unbounded, and survive until cleared.
#[derive(Clone, Default)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line to the log.
    pub fn add(&self, message: impl Into<String>) {
        self.entries.lock().unwrap().push(message.into());
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Snapshot of the log, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
