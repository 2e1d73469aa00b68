//! Row selection state
//!
//! Selection is keyed by row identity so it survives sorting, filtering,
//! and re-fetches of the same rows.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// ID-based row selection.
///
/// Serializes as a `{"<row id>": true}` map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowSelection {
    selected: BTreeSet<String>,
}

impl RowSelection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Iterate selected IDs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        std::mem::take(&mut self.selected).into_iter().collect()
    }

    /// Toggle selection of an ID.
    /// Returns `true` if the ID is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Select all of the provided IDs.
    /// Returns the IDs that were newly selected.
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        ids.into_iter()
            .filter(|id| self.selected.insert(id.to_string()))
            .map(str::to_string)
            .collect()
    }

    /// Deselect all of the provided IDs.
    /// Returns the IDs that were deselected.
    pub fn deselect_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        ids.into_iter()
            .filter(|id| self.selected.remove(*id))
            .map(str::to_string)
            .collect()
    }
}

impl Serialize for RowSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.selected.iter().map(|id| (id, true)))
    }
}

impl<'de> Deserialize<'de> for RowSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Ok(Self {
            selected: map
                .into_iter()
                .filter_map(|(id, selected)| selected.then_some(id))
                .collect(),
        })
    }
}
