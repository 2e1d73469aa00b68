//! Pagination state

use std::ops::Range;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// View-layer pagination over the filtered rows.
///
/// This slices whatever rows the view was given; it has nothing to do with
/// backend paging.
///
/// # Example
///
/// ```
/// use dataview_lib::state::Pagination;
///
/// let mut page = Pagination::new(5, 10);
/// page.clamp(23);
/// assert_eq!(page.page_index(), 2);
/// assert_eq!(page.range(23), 20..23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Creates pagination state. A zero page size falls back to the default.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Returns the zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Returns the number of rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages needed for `row_count` rows.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size)
    }

    /// Returns the largest legal page index for `row_count` rows.
    pub fn last_page_index(&self, row_count: usize) -> usize {
        self.page_count(row_count).saturating_sub(1)
    }

    /// Sets the page index without clamping.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Sets the page size. Returns `false` and leaves the state unchanged if
    /// `page_size` is zero.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.page_size = page_size;
        true
    }

    /// Clamps the page index into range for `row_count` rows.
    ///
    /// Returns `true` if the index changed.
    pub fn clamp(&mut self, row_count: usize) -> bool {
        let last = self.last_page_index(row_count);
        if self.page_index > last {
            self.page_index = last;
            return true;
        }
        false
    }

    /// Returns the row range of the current page within `row_count` rows.
    pub fn range(&self, row_count: usize) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(row_count);
        let end = start.saturating_add(self.page_size).min(row_count);
        start..end
    }

    /// Returns `true` if there is a page before the current one.
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Returns `true` if there is a page after the current one.
    pub fn has_next(&self, row_count: usize) -> bool {
        self.page_index + 1 < self.page_count(row_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_last_page() {
        let mut page = Pagination::new(5, 10);
        assert!(page.clamp(23));
        assert_eq!(page.page_index(), 2);
        assert!(!page.clamp(23));
    }

    #[test]
    fn test_clamp_empty() {
        let mut page = Pagination::new(3, 10);
        page.clamp(0);
        assert_eq!(page.page_index(), 0);
        assert_eq!(page.range(0), 0..0);
        assert_eq!(page.page_count(0), 0);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut page = Pagination::new(1, 25);
        assert!(!page.set_page_size(0));
        assert_eq!(page.page_size(), 25);
        assert_eq!(Pagination::new(0, 0).page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_navigation_bounds() {
        let page = Pagination::new(1, 10);
        assert!(page.has_previous());
        assert!(page.has_next(23));
        assert!(!Pagination::new(2, 10).has_next(23));
        assert_eq!(page.range(23), 10..20);
    }
}
