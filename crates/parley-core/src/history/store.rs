//! Fixed-capacity, append-only conversation log.
//!
//! `HistoryStore` keeps the most recent `capacity` entries of the single
//! global conversation. Appending past capacity evicts the oldest entry in the
//! same critical section, so readers never observe more than `capacity`
//! entries.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use parley_types::entry::ChatEntry;

/// Thread-safe bounded history.
///
/// Cloning produces a shared handle to the same log (backed by
/// `Arc<Mutex<...>>`). Readers only ever receive owned snapshots.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Arc<Mutex<VecDeque<ChatEntry>>>,
    capacity: usize,
}

impl HistoryStore {
    /// Create an empty store holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity + 1))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append `entry` as the newest item, evicting the oldest one if the log
    /// grows past capacity.
    pub fn append(&self, entry: ChatEntry) {
        let mut entries = self.lock();
        entries.push_back(entry);
        if entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Owned copy of the history, oldest first.
    pub fn snapshot(&self) -> Vec<ChatEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written entry:
    // push_back/pop_front either complete or never ran.
    fn lock(&self) -> MutexGuard<'_, VecDeque<ChatEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
