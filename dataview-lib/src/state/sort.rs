//! Sort state

use serde::Deserialize;
use serde::Serialize;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// A single sorted column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    /// The sorted column.
    #[serde(rename = "id")]
    pub column_id: String,
    /// The sort direction.
    #[serde(rename = "dir")]
    pub direction: Direction,
}

/// Ordered list of sorted columns.
///
/// Holds at most one entry per column. The view only ever produces a single
/// entry: choosing a new column replaces the previous one, and an empty list
/// means rows keep their input order.
///
/// # Example
///
/// ```
/// use dataview_lib::state::{Direction, Sorting};
///
/// let mut sorting = Sorting::default();
/// sorting.toggle("price");
/// assert_eq!(sorting.direction_of("price"), Some(Direction::Asc));
/// sorting.toggle("price");
/// assert_eq!(sorting.direction_of("price"), Some(Direction::Desc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sorting {
    entries: Vec<SortEntry>,
}

impl Sorting {
    /// Creates a sort on a single column.
    pub fn by(column_id: impl Into<String>, direction: Direction) -> Self {
        Self {
            entries: vec![SortEntry {
                column_id: column_id.into(),
                direction,
            }],
        }
    }

    /// Returns the sorted columns with their directions.
    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Returns `true` if no sort is applied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the direction a column is sorted in, if any.
    pub fn direction_of(&self, column_id: &str) -> Option<Direction> {
        self.entries
            .iter()
            .find(|e| e.column_id == column_id)
            .map(|e| e.direction)
    }

    /// Cycles a column through asc → desc → asc.
    ///
    /// Sorting a new column replaces any existing entry. A column is never
    /// cycled back to "unsorted".
    pub fn toggle(&mut self, column_id: &str) {
        let direction = match self.direction_of(column_id) {
            Some(current) => current.toggled(),
            None => Direction::Asc,
        };
        self.entries = vec![SortEntry {
            column_id: column_id.to_string(),
            direction,
        }];
    }

    /// Keeps only entries whose column passes `keep`, and at most one entry
    /// per column.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let mut seen = Vec::new();
        self.entries.retain(|e| {
            if seen.contains(&e.column_id) || !keep(&e.column_id) {
                return false;
            }
            seen.push(e.column_id.clone());
            true
        });
    }
}
