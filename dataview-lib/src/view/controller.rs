//! Table view controller

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::PageSelection;
use super::ViewProjection;
use super::sort_indices;
use crate::codec::HistoryMode;
use crate::codec::HistoryWriter;
use crate::codec::decode_query;
use crate::codec::encode_query;
use crate::columns::ColumnDef;
use crate::columns::ColumnModel;
use crate::columns::RowAction;
use crate::config::TableConfig;
use crate::filter::FilterEngine;
use crate::model::TableRow;
use crate::state::FilterValue;
use crate::state::TableState;

/// Controller for one table view.
///
/// Owns the composed state (sort, filters, visibility, selection, pagination,
/// search, select mode) over an immutable row snapshot. Every operation
/// changes one piece of state and runs one recomputation; operations whose
/// precondition fails leave the state untouched and return `false`.
///
/// After each committed change the encoded query string is handed to the
/// [`HistoryWriter`], if one is attached.
///
/// # Example
///
/// ```
/// use dataview_lib::columns::{ColumnDescriptor, ColumnModel};
/// use dataview_lib::model::{Record, Value};
/// use dataview_lib::{DataView, TableConfig};
///
/// let columns = ColumnModel::build(
///     vec![
///         ColumnDescriptor::field("name", "Name"),
///         ColumnDescriptor::field("stock", "Stock"),
///     ],
///     None,
///     false,
/// )
/// .unwrap();
/// let rows: Vec<Record> = (0..40)
///     .map(|i| Record::new(format!("p{i}")).set("name", format!("Product {i}")).set("stock", i as i64))
///     .collect();
///
/// let mut view = DataView::new(columns, rows, TableConfig::default());
/// view.toggle_sort("stock");
/// view.toggle_sort("stock");
/// view.set_page(1);
///
/// assert_eq!(view.projection().page_count(), 3);
/// assert_eq!(view.visible_rows()[0].value("stock"), Value::Int(24));
/// assert_eq!(view.query_string(), "page=2&sort=%5B%7B%22id%22%3A%22stock%22%2C%22dir%22%3A%22desc%22%7D%5D");
/// ```
pub struct DataView<R> {
    columns: ColumnModel<R>,
    rows: Arc<[R]>,
    state: TableState,
    config: TableConfig,
    history: Option<Arc<dyn HistoryWriter>>,
    projection: ViewProjection,
    last_query: String,
}

impl<R: TableRow> DataView<R> {
    /// Creates a view with default state.
    pub fn new(columns: ColumnModel<R>, rows: impl Into<Arc<[R]>>, config: TableConfig) -> Self {
        let mut state = TableState::with_page_size(config.default_page_size);
        state.select_mode = columns.selection_mode();
        Self::with_state(columns, rows.into(), config, state)
    }

    /// Creates a view with state decoded from a URL query string.
    ///
    /// Malformed parameters fall back to defaults and references to columns
    /// the model does not have are dropped.
    pub fn from_query(
        mut columns: ColumnModel<R>,
        rows: impl Into<Arc<[R]>>,
        config: TableConfig,
        query: &str,
    ) -> Self {
        let mut state = decode_query(query, &config);
        state.reconcile(&columns);
        columns.set_selection_mode(state.select_mode);
        Self::with_state(columns, rows.into(), config, state)
    }

    fn with_state(columns: ColumnModel<R>, rows: Arc<[R]>, config: TableConfig, state: TableState) -> Self {
        let mut view = Self {
            columns,
            rows,
            state,
            config,
            history: None,
            projection: ViewProjection::default(),
            last_query: String::new(),
        };
        view.recompute();
        view.last_query = encode_query(&view.state, &view.config);
        view
    }

    /// Attaches a history writer that receives the query string after every
    /// committed change.
    pub fn with_history(mut self, history: Arc<dyn HistoryWriter>) -> Self {
        self.history = Some(history);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the committed state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Returns the column model.
    pub fn columns(&self) -> &ColumnModel<R> {
        &self.columns
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the row snapshot.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the derived projection.
    pub fn projection(&self) -> &ViewProjection {
        &self.projection
    }

    /// Returns the rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&R> {
        self.projection.page.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Returns every row passing the filters, in display order.
    pub fn filtered_rows(&self) -> Vec<&R> {
        self.projection.filtered.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Returns the columns to render, in display order.
    pub fn visible_columns(&self) -> Vec<&ColumnDef<R>> {
        self.columns
            .columns()
            .iter()
            .filter(|c| self.state.visibility.is_visible(&c.id))
            .collect()
    }

    /// Returns the current query string (without the leading `?`).
    pub fn query_string(&self) -> String {
        encode_query(&self.state, &self.config)
    }

    /// Returns `true` if selection checkboxes are rendered.
    pub fn select_mode(&self) -> bool {
        self.state.select_mode
    }

    /// Returns `true` if there is a previous page.
    pub fn can_previous_page(&self) -> bool {
        self.state.pagination.has_previous()
    }

    /// Returns `true` if there is a next page.
    pub fn can_next_page(&self) -> bool {
        self.state
            .pagination
            .has_next(self.projection.filtered_count())
    }

    /// Finds a row in the snapshot by identity.
    pub fn find_row(&self, row_id: &str) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == row_id)
    }

    // =========================================================================
    // Selection queries
    // =========================================================================

    /// Returns `true` if the row is selected.
    pub fn is_row_selected(&self, row_id: &str) -> bool {
        self.state.selection.is_selected(row_id)
    }

    /// Returns the selected row identities, sorted.
    pub fn selected_ids(&self) -> Vec<String> {
        self.state.selection.selected()
    }

    /// Returns the number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.state.selection.len()
    }

    /// Returns the selected rows present in the snapshot, in snapshot order.
    pub fn selected_rows(&self) -> Vec<&R> {
        if self.state.selection.is_empty() {
            return Vec::new();
        }
        self.rows
            .iter()
            .filter(|row| self.state.selection.is_selected(&row.id()))
            .collect()
    }

    /// Returns how much of the current page is selected.
    pub fn page_selection(&self) -> PageSelection {
        let ids = self.page_ids();
        let selected = ids
            .iter()
            .filter(|id| self.state.selection.is_selected(id))
            .count();
        match selected {
            0 => PageSelection::None,
            n if n == ids.len() => PageSelection::All,
            _ => PageSelection::Some,
        }
    }

    // =========================================================================
    // Facets
    // =========================================================================

    /// Counts the distinct values of a column over the rows passing every
    /// other filter.
    pub fn faceted_values(&self, column_id: &str) -> BTreeMap<String, usize> {
        FilterEngine::new(&self.columns, &self.state.visibility).faceted_values(
            &self.rows,
            &self.state.global_filter,
            &self.state.filters,
            column_id,
        )
    }

    /// Returns the facets of every active filter column, in activation order.
    pub fn active_facets(&self) -> Vec<(String, BTreeMap<String, usize>)> {
        self.state
            .filters
            .active_ids()
            .into_iter()
            .map(|id| (id.to_string(), self.faceted_values(id)))
            .collect()
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Cycles a column's sort asc → desc → asc, replacing any other sort.
    pub fn toggle_sort(&mut self, column_id: &str) -> bool {
        if !self.columns.column(column_id).is_some_and(|c| c.is_sortable()) {
            log::debug!("Ignoring sort on non-sortable column {:?}", column_id);
            return false;
        }
        self.state.sorting.toggle(column_id);
        self.commit(HistoryMode::Push);
        true
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Opens a filter editor for a column.
    pub fn add_filter_column(&mut self, column_id: &str) -> bool {
        if !self.columns.column(column_id).is_some_and(|c| c.is_filterable()) {
            log::debug!("Ignoring filter on non-filterable column {:?}", column_id);
            return false;
        }
        if !self.state.filters.activate(column_id) {
            return false;
        }
        self.commit(HistoryMode::Push);
        true
    }

    /// Closes a column filter and drops its value.
    pub fn remove_filter_column(&mut self, column_id: &str) -> bool {
        if !self.state.filters.deactivate(column_id) {
            return false;
        }
        self.commit(HistoryMode::Push);
        true
    }

    /// Replaces the value of an active column filter.
    pub fn set_filter_value(&mut self, column_id: &str, value: FilterValue) -> bool {
        if !self.state.filters.set_value(column_id, value) {
            log::debug!("Ignoring value for inactive filter {:?}", column_id);
            return false;
        }
        self.commit(HistoryMode::Replace);
        true
    }

    /// Checks or unchecks one option of an active column filter.
    pub fn toggle_filter_option(&mut self, column_id: &str, option: &str, checked: bool) -> bool {
        if !self.state.filters.toggle_option(column_id, option, checked) {
            log::debug!("Ignoring option for inactive filter {:?}", column_id);
            return false;
        }
        self.commit(HistoryMode::Replace);
        true
    }

    /// Sets the global search text and returns to the first page.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        self.state.global_filter = text.into();
        self.state.pagination.set_page_index(0);
        self.commit(HistoryMode::Replace);
    }

    /// Closes every column filter and clears the search.
    pub fn reset_filters(&mut self) {
        self.state.filters.clear();
        self.state.global_filter.clear();
        self.commit(HistoryMode::Push);
    }

    // =========================================================================
    // Column visibility
    // =========================================================================

    /// Shows or hides a column.
    pub fn toggle_column_visibility(&mut self, column_id: &str, visible: bool) -> bool {
        if !self.columns.column(column_id).is_some_and(|c| c.is_hideable()) {
            log::debug!("Ignoring visibility change on column {:?}", column_id);
            return false;
        }
        self.state.visibility.set(column_id, visible);
        self.commit(HistoryMode::Replace);
        true
    }

    /// Reverts every column to visible.
    pub fn reset_column_visibility(&mut self) {
        self.state.visibility.reset();
        self.commit(HistoryMode::Replace);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flips the selection of a row present in the snapshot.
    pub fn toggle_row_selected(&mut self, row_id: &str) -> bool {
        if self.find_row(row_id).is_none() {
            log::debug!("Ignoring selection of unknown row {:?}", row_id);
            return false;
        }
        self.state.selection.toggle(row_id);
        self.commit(HistoryMode::Replace);
        true
    }

    /// Selects every row on the current page, or deselects them if they are
    /// all selected already.
    ///
    /// Scope is the current page slice of the filtered rows; rows on other
    /// pages are untouched. See [`select_all_filtered`](Self::select_all_filtered)
    /// for the wider scope.
    pub fn toggle_select_all(&mut self) {
        let ids = self.page_ids();
        if self.page_selection() == PageSelection::All {
            self.state
                .selection
                .deselect_all(ids.iter().map(String::as_str));
        } else {
            self.state
                .selection
                .select_all(ids.iter().map(String::as_str));
        }
        self.commit(HistoryMode::Replace);
    }

    /// Selects every row passing the filters, across all pages.
    pub fn select_all_filtered(&mut self) {
        let ids: Vec<String> = self
            .projection
            .filtered
            .iter()
            .map(|&i| self.rows[i].id())
            .collect();
        self.state
            .selection
            .select_all(ids.iter().map(String::as_str));
        self.commit(HistoryMode::Replace);
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
        self.commit(HistoryMode::Replace);
    }

    /// Turns selection checkboxes on or off. Existing selections are kept.
    pub fn toggle_select_mode(&mut self) {
        self.state.select_mode = !self.state.select_mode;
        self.columns.set_selection_mode(self.state.select_mode);
        self.commit(HistoryMode::Push);
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Moves to a page, clamped to the available pages.
    pub fn set_page(&mut self, page_index: usize) {
        self.state.pagination.set_page_index(page_index);
        self.commit(HistoryMode::Push);
    }

    /// Moves to the next page, if there is one.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        self.set_page(self.state.pagination.page_index() + 1);
        true
    }

    /// Moves to the previous page, if there is one.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            return false;
        }
        self.set_page(self.state.pagination.page_index() - 1);
        true
    }

    /// Changes the page size, keeping the first visible row on screen.
    ///
    /// A zero page size is rejected and leaves the state unchanged.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let first_row = self.state.pagination.page_index() * self.state.pagination.page_size();
        if !self.state.pagination.set_page_size(page_size) {
            log::debug!("Rejecting page size {}", page_size);
            return false;
        }
        self.state.pagination.set_page_index(first_row / page_size);
        self.commit(HistoryMode::Push);
        true
    }

    // =========================================================================
    // Rows and actions
    // =========================================================================

    /// Replaces the row snapshot, e.g. after a backend query re-ran.
    ///
    /// State is kept; the page is re-clamped against the new rows.
    pub fn set_rows(&mut self, rows: impl Into<Arc<[R]>>) {
        self.rows = rows.into();
        self.commit(HistoryMode::Replace);
    }

    /// Invokes a row action with the row's record.
    ///
    /// Returns `false` if the row or the action does not exist.
    pub fn invoke_action(&self, action: RowAction<'_>, row_id: &str) -> bool {
        match self.find_row(row_id) {
            Some(row) => self.columns.invoke(action, row),
            None => false,
        }
    }

    /// Clears the selection after a successful bulk delete.
    pub(crate) fn finish_bulk_delete(&mut self) {
        self.state.selection.clear();
        self.commit(HistoryMode::Replace);
    }

    // =========================================================================
    // Recomputation
    // =========================================================================

    fn page_ids(&self) -> Vec<String> {
        self.projection
            .page
            .iter()
            .map(|&i| self.rows[i].id())
            .collect()
    }

    fn commit(&mut self, mode: HistoryMode) {
        self.recompute();

        let query = encode_query(&self.state, &self.config);
        if query == self.last_query {
            return;
        }
        if let Some(history) = &self.history {
            history.write(&query, mode);
        }
        self.last_query = query;
    }

    fn recompute(&mut self) {
        let engine = FilterEngine::new(&self.columns, &self.state.visibility);
        let mut filtered = engine.apply(&self.rows, &self.state.global_filter, &self.state.filters);
        sort_indices(&self.rows, &mut filtered, &self.columns, &self.state.sorting);

        let pagination = &mut self.state.pagination;
        if pagination.clamp(filtered.len()) {
            log::debug!("Clamped page index to {}", pagination.page_index());
        }
        let page = filtered[pagination.range(filtered.len())].to_vec();
        let page_count = pagination.page_count(filtered.len());

        log::trace!(
            "Recomputed view: {} of {} rows, page {}/{}",
            filtered.len(),
            self.rows.len(),
            pagination.page_index() + 1,
            page_count
        );

        self.projection = ViewProjection {
            filtered,
            page,
            page_count,
        };
    }
}

impl<R> fmt::Debug for DataView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataView")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("state", &self.state)
            .field("projection", &self.projection)
            .field("history", &self.history.is_some())
            .finish_non_exhaustive()
    }
}
