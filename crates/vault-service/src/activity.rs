//! Capacity-bounded activity feed, newest first.

use vault_entity::activity::{ActivityRecord, NewActivity};

/// Append-only activity log that keeps only the most recent entries.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    /// Entries ordered newest first.
    entries: Vec<ActivityRecord>,
    /// Maximum number of retained entries.
    capacity: usize,
}

impl ActivityLog {
    /// Create an empty log. Capacity is at least one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Rebuild a log from stored entries (already newest first).
    pub fn from_entries(mut entries: Vec<ActivityRecord>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Stamp `entry` with an id and the current time and put it at the front.
    ///
    /// The oldest entries beyond capacity are dropped.
    pub fn append(&mut self, entry: NewActivity) -> &ActivityRecord {
        self.entries.insert(0, ActivityRecord::stamp(entry));
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    /// The `n` most recent entries, newest first.
    pub fn recent(&self, n: usize) -> &[ActivityRecord] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// All retained entries, newest first.
    pub fn entries(&self) -> &[ActivityRecord] {
        &self.entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
