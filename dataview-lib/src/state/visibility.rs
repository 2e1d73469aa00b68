//! Column visibility state

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// Per-column visibility overrides.
///
/// Columns are visible unless listed here as `false`. Only hidden columns
/// are stored, so the encoded form carries non-default entries only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility {
    columns: BTreeMap<String, bool>,
}

impl ColumnVisibility {
    /// Returns `true` if the column is visible.
    pub fn is_visible(&self, column_id: &str) -> bool {
        self.columns.get(column_id).copied().unwrap_or(true)
    }

    /// Shows or hides a column.
    pub fn set(&mut self, column_id: &str, visible: bool) {
        if visible {
            self.columns.remove(column_id);
        } else {
            self.columns.insert(column_id.to_string(), false);
        }
    }

    /// Returns the hidden column ids.
    pub fn hidden(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, visible)| !**visible)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Returns `true` if every column is at its default visibility.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Reverts every column to visible.
    pub fn reset(&mut self) {
        self.columns.clear();
    }

    /// Keeps only hidden entries whose column passes `keep`.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.columns.retain(|id, visible| !*visible && keep(id));
    }
}
