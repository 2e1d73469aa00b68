//! Derived view data

/// Rows derived from the committed state: filtered, sorted, and sliced.
///
/// Holds indices into the row snapshot rather than copies of the rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewProjection {
    pub(crate) filtered: Vec<usize>,
    pub(crate) page: Vec<usize>,
    pub(crate) page_count: usize,
}

impl ViewProjection {
    /// Snapshot indices of every row passing the filters, in sorted order.
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// Snapshot indices of the rows on the current page, in sorted order.
    pub fn page_indices(&self) -> &[usize] {
        &self.page
    }

    /// Number of rows passing the filters.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Number of pages over the filtered rows.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns `true` if no row is visible.
    pub fn is_empty(&self) -> bool {
        self.page.is_empty()
    }
}

/// Selection state of the current page, for the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// No row on the page is selected (or the page is empty).
    None,
    /// Some rows on the page are selected.
    Some,
    /// Every row on the page is selected.
    All,
}
