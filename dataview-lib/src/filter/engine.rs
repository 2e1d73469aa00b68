//! Row filtering and faceting

use std::collections::BTreeMap;

use super::matches_search;
use crate::columns::ColumnDef;
use crate::columns::ColumnModel;
use crate::state::ColumnFilters;
use crate::state::ColumnVisibility;

/// Applies the global search and column filters of a view.
///
/// The global search covers visible filterable columns. Column filters on
/// ids the model does not know, or on columns that cannot be filtered, are
/// ignored.
///
/// # Example
///
/// ```
/// use dataview_lib::columns::{ColumnDescriptor, ColumnModel};
/// use dataview_lib::filter::FilterEngine;
/// use dataview_lib::model::Record;
/// use dataview_lib::state::{ColumnFilters, ColumnVisibility, FilterValue};
///
/// let columns = ColumnModel::build(vec![ColumnDescriptor::field("status", "Status")], None, false)
///     .unwrap();
/// let rows = vec![
///     Record::new("1").set("status", "active"),
///     Record::new("2").set("status", "active"),
///     Record::new("3").set("status", "inactive"),
/// ];
/// let mut filters = ColumnFilters::default();
/// filters.activate("status");
/// filters.set_value("status", FilterValue::multi(["active"]));
///
/// let visibility = ColumnVisibility::default();
/// let engine = FilterEngine::new(&columns, &visibility);
/// assert_eq!(engine.apply(&rows, "", &filters), vec![0, 1]);
///
/// let facets = engine.faceted_values(&rows, "", &filters, "status");
/// assert_eq!(facets.get("active"), Some(&2));
/// assert_eq!(facets.get("inactive"), Some(&1));
/// ```
pub struct FilterEngine<'a, R> {
    columns: &'a ColumnModel<R>,
    visibility: &'a ColumnVisibility,
}

impl<'a, R> FilterEngine<'a, R> {
    /// Creates an engine over a column model and the current visibility.
    pub fn new(columns: &'a ColumnModel<R>, visibility: &'a ColumnVisibility) -> Self {
        Self {
            columns,
            visibility,
        }
    }

    /// Returns the indices of rows passing all filters, in input order.
    ///
    /// The global search runs first, then each column filter in activation
    /// order.
    pub fn apply(&self, rows: &[R], global: &str, filters: &ColumnFilters) -> Vec<usize> {
        self.apply_except(rows, global, filters, None)
    }

    /// Like [`apply`](Self::apply), skipping the filter on `skip`.
    pub fn apply_except(
        &self,
        rows: &[R],
        global: &str,
        filters: &ColumnFilters,
        skip: Option<&str>,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..rows.len()).collect();

        let needle = global.trim().to_lowercase();
        if !needle.is_empty() {
            let searchable = self.searchable_columns();
            indices.retain(|&i| {
                searchable
                    .iter()
                    .any(|column| matches_search(&column.value(&rows[i]), &needle))
            });
        }

        for (column_id, value) in filters.constraints() {
            if skip == Some(column_id) {
                continue;
            }
            let Some(column) = self.columns.column(column_id).filter(|c| c.is_filterable())
            else {
                continue;
            };
            indices.retain(|&i| column.matches(&rows[i], value));
        }

        indices
    }

    /// Counts distinct values of `column_id` over the rows passing every
    /// filter except the one on `column_id` itself.
    ///
    /// Selecting an option in a column's own filter never shrinks that
    /// column's option list. Null cells are not counted.
    pub fn faceted_values(
        &self,
        rows: &[R],
        global: &str,
        filters: &ColumnFilters,
        column_id: &str,
    ) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        let Some(column) = self.columns.column(column_id) else {
            return counts;
        };

        for i in self.apply_except(rows, global, filters, Some(column_id)) {
            if let Some(text) = column.value(&rows[i]).to_filter_string() {
                *counts.entry(text).or_insert(0) += 1;
            }
        }
        counts
    }

    fn searchable_columns(&self) -> Vec<&'a ColumnDef<R>> {
        self.columns
            .data_columns()
            .filter(|c| c.is_filterable() && self.visibility.is_visible(&c.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ColumnDescriptor;
    use crate::model::Record;
    use crate::state::FilterValue;

    fn model() -> ColumnModel<Record> {
        ColumnModel::build(
            vec![
                ColumnDescriptor::field("name", "Name"),
                ColumnDescriptor::field("category", "Category"),
                ColumnDescriptor::field("sku", "SKU").not_filterable(),
            ],
            None,
            false,
        )
        .unwrap()
    }

    fn rows() -> Vec<Record> {
        vec![
            Record::new("1")
                .set("name", "Blue Dream")
                .set("category", "flower")
                .set("sku", "BD-1"),
            Record::new("2")
                .set("name", "Sour Diesel")
                .set("category", "flower")
                .set("sku", "SD-2"),
            Record::new("3")
                .set("name", "Dream Gummies")
                .set("category", "edible")
                .set("sku", "DG-3"),
            Record::new("4").set("name", "Mystery"),
        ]
    }

    #[test]
    fn test_global_search_skips_unfilterable() {
        let columns = model();
        let visibility = ColumnVisibility::default();
        let engine = FilterEngine::new(&columns, &visibility);
        let filters = ColumnFilters::default();

        assert_eq!(engine.apply(&rows(), "dream", &filters), vec![0, 2]);
        assert_eq!(engine.apply(&rows(), "BD-1", &filters), Vec::<usize>::new());
        assert_eq!(engine.apply(&rows(), "   ", &filters), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_global_search_skips_hidden() {
        let columns = model();
        let mut visibility = ColumnVisibility::default();
        visibility.set("category", false);
        let engine = FilterEngine::new(&columns, &visibility);

        assert!(engine.apply(&rows(), "edible", &ColumnFilters::default()).is_empty());
    }

    #[test]
    fn test_global_and_column_filters_combine() {
        let columns = model();
        let visibility = ColumnVisibility::default();
        let engine = FilterEngine::new(&columns, &visibility);
        let mut filters = ColumnFilters::default();
        filters.activate("category");
        filters.set_value("category", FilterValue::multi(["flower"]));

        assert_eq!(engine.apply(&rows(), "dream", &filters), vec![0]);
    }

    #[test]
    fn test_unknown_and_unfilterable_columns_ignored() {
        let columns = model();
        let visibility = ColumnVisibility::default();
        let engine = FilterEngine::new(&columns, &visibility);
        let mut filters = ColumnFilters::default();
        filters.activate("removed");
        filters.set_value("removed", FilterValue::scalar("x"));
        filters.activate("sku");
        filters.set_value("sku", FilterValue::scalar("zzz"));

        assert_eq!(engine.apply(&rows(), "", &filters).len(), 4);
    }

    #[test]
    fn test_facets_exclude_own_filter_only() {
        let columns = model();
        let visibility = ColumnVisibility::default();
        let engine = FilterEngine::new(&columns, &visibility);
        let mut filters = ColumnFilters::default();
        filters.activate("category");
        filters.set_value("category", FilterValue::multi(["edible"]));

        let own = engine.faceted_values(&rows(), "", &filters, "category");
        assert_eq!(own.get("flower"), Some(&2));
        assert_eq!(own.get("edible"), Some(&1));
        assert_eq!(own.len(), 2);

        filters.activate("name");
        filters.set_value("name", FilterValue::scalar("sour"));
        let narrowed = engine.faceted_values(&rows(), "", &filters, "category");
        assert_eq!(narrowed.get("flower"), Some(&1));
        assert_eq!(narrowed.get("edible"), None);
    }
}
