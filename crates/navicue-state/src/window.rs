//! RecentWindow: fixed-capacity FIFO used for the recency windows.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Bounded FIFO. Pushing into a full window evicts the oldest entry, so
/// `len() <= capacity()` holds after every operation, including deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WindowRepr<T>", into = "WindowRepr<T>")]
#[serde(bound(
    serialize = "T: Serialize + Clone",
    deserialize = "T: Deserialize<'de>"
))]
pub struct RecentWindow<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

#[derive(Serialize, Deserialize)]
struct WindowRepr<T> {
    capacity: usize,
    entries: Vec<T>,
}

impl<T> From<WindowRepr<T>> for RecentWindow<T> {
    fn from(repr: WindowRepr<T>) -> Self {
        let mut window = Self::with_capacity(repr.capacity);
        for entry in repr.entries {
            window.push(entry);
        }
        window
    }
}

impl<T> From<RecentWindow<T>> for WindowRepr<T> {
    fn from(window: RecentWindow<T>) -> Self {
        Self {
            capacity: window.capacity,
            entries: window.entries.into_iter().collect(),
        }
    }
}

impl<T> RecentWindow<T> {
    /// Create an empty window. A zero capacity is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, returning the evicted oldest entry if the window was full.
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The `n` oldest entries, oldest first.
    pub fn oldest(&self, n: usize) -> impl Iterator<Item = &T> {
        self.entries.iter().take(n)
    }

    /// The `n` newest entries, oldest first.
    pub fn newest(&self, n: usize) -> impl Iterator<Item = &T> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: PartialEq> RecentWindow<T> {
    pub fn contains(&self, entry: &T) -> bool {
        self.entries.contains(entry)
    }

    /// Number of occurrences of `entry` in the window.
    pub fn count(&self, entry: &T) -> usize {
        self.entries.iter().filter(|e| *e == entry).count()
    }
}

impl RecentWindow<String> {
    /// `contains` for borrowed string keys.
    pub fn contains_str(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// `count` for borrowed string keys.
    pub fn count_str(&self, entry: &str) -> usize {
        self.entries.iter().filter(|e| *e == entry).count()
    }
}
