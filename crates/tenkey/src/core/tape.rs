//! In-memory tape of completed computations.
//!
//! The tape lives only for the session; nothing is persisted. Entries are
//! serde-serializable so an embedding UI can hand them to its renderer.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::format;

/// One completed computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The computed expression, e.g. `"3 + 4"`.
    pub expression: String,
    /// The rounded result.
    pub result: f64,
}

impl TapeEntry {
    /// Creates a new tape entry.
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self { expression, result }
    }

    /// Returns the formatted tape line, e.g. `"3 + 4 = 7"`.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} = {}", self.expression, format::render(self.result))
    }
}

/// Bounded record of completed computations, oldest first.
///
/// The bound prevents unbounded growth over a long session; when full,
/// the oldest entry drops.
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length.
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty tape with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates an empty tape with a custom capacity.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, dropping the oldest when at capacity.
    pub fn push(&mut self, entry: TapeEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a completed computation.
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(TapeEntry::new(expression.to_string(), result));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tape is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries kept.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Returns the entry at the given index (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TapeEntry> {
        self.entries.get(index)
    }

    /// Returns every entry as a formatted line, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(TapeEntry::line).collect()
    }
}
