//! Newest-first bounded feed backing the activity log and traffic panels.

use std::collections::VecDeque;

/// Fixed-capacity, newest-first append log.
///
/// Pushing beyond capacity evicts the oldest entries from the tail; eviction
/// is normal, expected behavior, never an error. Entries are immutable once
/// pushed and there is no removal other than eviction.
#[derive(Debug)]
pub struct BoundedFeed<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> BoundedFeed<T> {
    /// Creates an empty feed holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Prepends `item` as the newest entry, dropping tail entries beyond
    /// capacity.
    pub fn push(&mut self, item: T) {
        self.entries.push_front(item);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the contents, newest first. Callers re-rendering from a
    /// snapshot are unaffected by later pushes.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}
