//! Built column model

use std::collections::HashSet;
use std::fmt;

use super::ACTIONS_COLUMN_ID;
use super::Accessor;
use super::ActionConfig;
use super::ColumnDescriptor;
use super::ColumnKind;
use super::FilterPredicate;
use super::RowAction;
use super::SELECT_COLUMN_ID;
use super::is_reserved;
use crate::error::BuildError;
use crate::filter::default_predicate;
use crate::model::Value;
use crate::state::FilterValue;

/// A column in a built [`ColumnModel`].
pub struct ColumnDef<R> {
    /// Column id.
    pub id: String,
    /// Header label (empty for structural columns).
    pub header: String,
    /// Column kind and capabilities.
    pub kind: ColumnKind,
    /// Optional width hint.
    pub size_hint: Option<u16>,
    accessor: Option<Accessor<R>>,
    predicate: Option<FilterPredicate>,
}

impl<R> ColumnDef<R> {
    fn structural(id: &str, kind: ColumnKind) -> Self {
        Self {
            id: id.to_string(),
            header: String::new(),
            kind,
            size_hint: None,
            accessor: None,
            predicate: None,
        }
    }

    /// Returns the cell value for a row; structural columns yield null.
    pub fn value(&self, row: &R) -> Value {
        match &self.accessor {
            Some(accessor) => accessor(row),
            None => Value::Null,
        }
    }

    /// Returns `true` if the row's cell passes `filter`.
    pub fn matches(&self, row: &R, filter: &FilterValue) -> bool {
        let value = self.value(row);
        match &self.predicate {
            Some(predicate) => predicate(&value, filter),
            None => default_predicate(&value, filter),
        }
    }

    /// Returns `true` if the column can be sorted.
    pub fn is_sortable(&self) -> bool {
        self.kind.capabilities().sortable
    }

    /// Returns `true` if the column can be hidden.
    pub fn is_hideable(&self) -> bool {
        self.kind.capabilities().hideable
    }

    /// Returns `true` if the column can be filtered.
    pub fn is_filterable(&self) -> bool {
        self.kind.capabilities().filterable
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("kind", &self.kind)
            .field("size_hint", &self.size_hint)
            .finish_non_exhaustive()
    }
}

/// Ordered column set of a table: selection, data columns, actions.
pub struct ColumnModel<R> {
    columns: Vec<ColumnDef<R>>,
    actions: Option<ActionConfig<R>>,
    selection_mode: bool,
}

impl<R> ColumnModel<R> {
    /// Builds a column model from descriptors.
    ///
    /// The selection column is always present so toggling select mode never
    /// shifts the other columns; `selection_mode` only decides whether it
    /// renders checkboxes. The actions column is appended when `actions`
    /// configures at least one action.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] on duplicate, reserved, or empty column ids.
    pub fn build(
        descriptors: Vec<ColumnDescriptor<R>>,
        actions: Option<ActionConfig<R>>,
        selection_mode: bool,
    ) -> Result<Self, BuildError> {
        let mut seen = HashSet::with_capacity(descriptors.len());
        let mut columns = Vec::with_capacity(descriptors.len() + 2);
        columns.push(ColumnDef::structural(SELECT_COLUMN_ID, ColumnKind::Selection));

        for descriptor in descriptors {
            if descriptor.id.is_empty() {
                return Err(BuildError::EmptyColumnId);
            }
            if is_reserved(&descriptor.id) {
                return Err(BuildError::ReservedColumnId(descriptor.id));
            }
            if !seen.insert(descriptor.id.clone()) {
                return Err(BuildError::DuplicateColumnId(descriptor.id));
            }
            columns.push(ColumnDef {
                id: descriptor.id,
                header: descriptor.header,
                kind: ColumnKind::Data(descriptor.capabilities),
                size_hint: descriptor.size_hint,
                accessor: Some(descriptor.accessor),
                predicate: descriptor.filter_predicate,
            });
        }

        let actions = actions.filter(ActionConfig::has_actions);
        if actions.is_some() {
            columns.push(ColumnDef::structural(ACTIONS_COLUMN_ID, ColumnKind::Actions));
        }

        log::debug!(
            "Built column model: {} data columns, actions: {}",
            seen.len(),
            actions.is_some()
        );

        Ok(Self {
            columns,
            actions,
            selection_mode,
        })
    }

    /// Returns all columns in display order.
    pub fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    /// Returns a column by id.
    pub fn column(&self, id: &str) -> Option<&ColumnDef<R>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns the data columns in display order.
    pub fn data_columns(&self) -> impl Iterator<Item = &ColumnDef<R>> {
        self.columns.iter().filter(|c| !c.kind.is_structural())
    }

    /// Columns a filter editor can be opened for.
    pub fn filter_candidates(&self) -> Vec<&ColumnDef<R>> {
        self.data_columns().filter(|c| c.is_filterable()).collect()
    }

    /// Columns offered in the visibility menu.
    pub fn visibility_candidates(&self) -> Vec<&ColumnDef<R>> {
        self.data_columns().filter(|c| c.is_hideable()).collect()
    }

    /// Returns `true` if the actions column is present.
    pub fn has_actions_column(&self) -> bool {
        self.actions.is_some()
    }

    /// Returns the row action configuration, if any.
    pub fn actions(&self) -> Option<&ActionConfig<R>> {
        self.actions.as_ref()
    }

    /// Returns `true` if the selection column renders checkboxes.
    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    /// Turns selection checkboxes on or off.
    pub fn set_selection_mode(&mut self, on: bool) {
        self.selection_mode = on;
    }

    /// Invokes a row action with the row's record.
    ///
    /// Returns `false` if the action is not configured.
    pub fn invoke(&self, action: RowAction<'_>, row: &R) -> bool {
        match self.actions.as_ref().and_then(|a| a.callback(action)) {
            Some(callback) => {
                callback(row);
                true
            }
            None => false,
        }
    }
}

impl<R> fmt::Debug for ColumnModel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnModel")
            .field("columns", &self.columns)
            .field("actions", &self.actions)
            .field("selection_mode", &self.selection_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::model::Record;

    fn ids(model: &ColumnModel<Record>) -> Vec<&str> {
        model.columns().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_selection_column_always_present() {
        let model = ColumnModel::build(vec![ColumnDescriptor::field("name", "Name")], None, false)
            .unwrap();
        assert_eq!(ids(&model), vec!["select", "name"]);
        assert!(!model.selection_mode());
        assert_eq!(model.columns()[0].kind, ColumnKind::Selection);
    }

    #[test]
    fn test_actions_column_requires_an_action() {
        let model = ColumnModel::build(
            vec![ColumnDescriptor::field("name", "Name")],
            Some(ActionConfig::new()),
            true,
        )
        .unwrap();
        assert_eq!(ids(&model), vec!["select", "name"]);

        let model = ColumnModel::build(
            vec![ColumnDescriptor::field("name", "Name")],
            Some(ActionConfig::new().custom("archive", "Archive", |_: &Record| {})),
            true,
        )
        .unwrap();
        assert_eq!(ids(&model), vec!["select", "name", "actions"]);
        let actions = model.column("actions").unwrap();
        assert!(!actions.is_sortable());
        assert!(!actions.is_hideable());
        assert!(!actions.is_filterable());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = ColumnModel::build(
            vec![
                ColumnDescriptor::field("name", "Name"),
                ColumnDescriptor::field("name", "Other"),
            ],
            None,
            false,
        )
        .unwrap_err();
        assert_eq!(err, BuildError::DuplicateColumnId("name".into()));
    }

    #[test]
    fn test_reserved_id_rejected() {
        let err = ColumnModel::build(vec![ColumnDescriptor::field("select", "Pick")], None, false)
            .unwrap_err();
        assert_eq!(err, BuildError::ReservedColumnId("select".into()));
    }

    #[test]
    fn test_candidates_exclude_structural_and_disabled() {
        let model = ColumnModel::build(
            vec![
                ColumnDescriptor::field("name", "Name"),
                ColumnDescriptor::field("sku", "SKU").not_hideable(),
                ColumnDescriptor::field("image", "Image").not_filterable(),
            ],
            Some(ActionConfig::new().on_delete(|_: &Record| {})),
            true,
        )
        .unwrap();

        let filterable: Vec<_> = model.filter_candidates().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(filterable, vec!["name", "sku"]);
        let hideable: Vec<_> = model
            .visibility_candidates()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(hideable, vec!["name", "image"]);
    }

    #[test]
    fn test_invoke_action() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let model = ColumnModel::build(
            vec![ColumnDescriptor::field("name", "Name")],
            Some(ActionConfig::new().on_view(move |_: &Record| {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
            false,
        )
        .unwrap();

        let row = Record::new("r1");
        assert!(model.invoke(RowAction::View, &row));
        assert!(!model.invoke(RowAction::Delete, &row));
        assert!(!model.invoke(RowAction::Custom("nope"), &row));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_predicate() {
        let model = ColumnModel::build(
            vec![ColumnDescriptor::field("stock", "Stock").filter_with(|value, filter| {
                match (value, filter) {
                    (Value::Int(n), FilterValue::Scalar(min)) => {
                        min.parse::<i64>().is_ok_and(|min| *n >= min)
                    }
                    _ => false,
                }
            })],
            None,
            false,
        )
        .unwrap();

        let column = model.column("stock").unwrap();
        let row = Record::new("r1").set("stock", 12i64);
        assert!(column.matches(&row, &FilterValue::scalar("10")));
        assert!(!column.matches(&row, &FilterValue::scalar("20")));
    }
}
