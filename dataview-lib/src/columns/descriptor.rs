//! Column descriptors

use std::fmt;
use std::sync::Arc;

use super::Capabilities;
use crate::model::Record;
use crate::model::Value;
use crate::state::FilterValue;

/// Extracts a cell value from a row.
pub type Accessor<R> = Arc<dyn Fn(&R) -> Value + Send + Sync>;

/// Decides whether a cell value passes a filter value.
pub type FilterPredicate = Arc<dyn Fn(&Value, &FilterValue) -> bool + Send + Sync>;

/// Static definition of one data column.
///
/// Capabilities default to all allowed; the builder methods switch them off.
pub struct ColumnDescriptor<R> {
    /// Stable column id, unique within a table.
    pub id: String,
    /// Header label.
    pub header: String,
    /// Cell value extractor.
    pub accessor: Accessor<R>,
    /// Optional width hint.
    pub size_hint: Option<u16>,
    /// Sort/hide/filter capabilities.
    pub capabilities: Capabilities,
    /// Replaces the default filter predicate when set.
    pub filter_predicate: Option<FilterPredicate>,
}

impl<R> ColumnDescriptor<R> {
    /// Creates a descriptor with an accessor closure.
    pub fn new<F>(id: impl Into<String>, header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Arc::new(accessor),
            size_hint: None,
            capabilities: Capabilities::ALL,
            filter_predicate: None,
        }
    }

    /// Sets the width hint.
    pub fn size(mut self, width: u16) -> Self {
        self.size_hint = Some(width);
        self
    }

    /// Disables sorting on this column.
    pub fn not_sortable(mut self) -> Self {
        self.capabilities.sortable = false;
        self
    }

    /// Disables hiding this column.
    pub fn not_hideable(mut self) -> Self {
        self.capabilities.hideable = false;
        self
    }

    /// Disables filtering on this column, including the global search.
    pub fn not_filterable(mut self) -> Self {
        self.capabilities.filterable = false;
        self
    }

    /// Overrides the default filter predicate.
    pub fn filter_with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value, &FilterValue) -> bool + Send + Sync + 'static,
    {
        self.filter_predicate = Some(Arc::new(predicate));
        self
    }
}

impl ColumnDescriptor<Record> {
    /// Creates a descriptor reading the field of the same name from a [`Record`].
    pub fn field(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        let field = id.clone();
        Self::new(id, header, move |record: &Record| record.value(&field))
    }
}

impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
            size_hint: self.size_hint,
            capabilities: self.capabilities,
            filter_predicate: self.filter_predicate.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("size_hint", &self.size_hint)
            .field("capabilities", &self.capabilities)
            .field("custom_predicate", &self.filter_predicate.is_some())
            .finish_non_exhaustive()
    }
}
