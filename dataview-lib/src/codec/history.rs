//! Address bar synchronization

use std::sync::Mutex;

/// How a state change is written to the browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Add a history entry (discrete actions: page, sort, filter columns).
    Push,
    /// Overwrite the current entry (keystroke-level edits: search, filter text).
    Replace,
}

/// Receives the encoded query string after every committed state change.
///
/// Implementations update the address bar without a full navigation. When
/// two writes happen back to back the later one wins.
pub trait HistoryWriter: Send + Sync {
    /// Writes `query` (without the leading `?`).
    fn write(&self, query: &str, mode: HistoryMode);
}

/// In-memory history stack.
///
/// `Push` appends an entry and `Replace` overwrites the newest one, like a
/// browser session history without forward entries.
///
/// # Example
///
/// ```
/// use dataview_lib::codec::{HistoryMode, HistoryWriter, MemoryHistory};
///
/// let history = MemoryHistory::new();
/// history.write("page=2", HistoryMode::Push);
/// history.write("page=2&search=b", HistoryMode::Replace);
/// assert_eq!(history.entries(), vec!["page=2&search=b".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the newest entry.
    pub fn current(&self) -> Option<String> {
        self.entries().pop()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HistoryWriter for MemoryHistory {
    fn write(&self, query: &str, mode: HistoryMode) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        match (mode, entries.last_mut()) {
            (HistoryMode::Replace, Some(last)) => *last = query.to_string(),
            _ => entries.push(query.to_string()),
        }
    }
}
