//! View state
//!
//! The composite state owned by a [`DataView`](crate::DataView). Each piece
//! has its own URL codec (see [`codec`](crate::codec)) and its own invariants;
//! [`TableState::reconcile`] drops anything that refers to columns the live
//! column model does not have.

mod filter;
mod pagination;
mod selection;
mod sort;
mod visibility;

pub use filter::ColumnFilter;
pub use filter::ColumnFilters;
pub use filter::FilterValue;
pub use pagination::DEFAULT_PAGE_SIZE;
pub use pagination::Pagination;
pub use selection::RowSelection;
pub use sort::Direction;
pub use sort::SortEntry;
pub use sort::Sorting;
pub use visibility::ColumnVisibility;

use crate::columns::ColumnModel;

/// All state driving a table view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableState {
    /// Active sort (at most one column).
    pub sorting: Sorting,
    /// Active filter columns and their values, in activation order.
    pub filters: ColumnFilters,
    /// Hidden columns.
    pub visibility: ColumnVisibility,
    /// Selected row identities.
    pub selection: RowSelection,
    /// Current page.
    pub pagination: Pagination,
    /// Free-text search across filterable columns.
    pub global_filter: String,
    /// Whether selection checkboxes are rendered.
    pub select_mode: bool,
}

impl TableState {
    /// Creates a default state with the given page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(0, page_size),
            ..Default::default()
        }
    }

    /// Drops state that the column model cannot honor.
    ///
    /// Stale URLs may reference removed columns or capabilities a column no
    /// longer has; those entries are discarded rather than treated as errors.
    pub fn reconcile<R>(&mut self, columns: &ColumnModel<R>) {
        self.sorting
            .retain(|id| columns.column(id).is_some_and(|c| c.is_sortable()));
        self.filters
            .retain(|id| columns.column(id).is_some_and(|c| c.is_filterable()));
        self.visibility
            .retain(|id| columns.column(id).is_some_and(|c| c.is_hideable()));
    }
}
