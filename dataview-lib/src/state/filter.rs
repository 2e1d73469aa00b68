//! Column filter state

use serde::Deserialize;
use serde::Serialize;

/// The value of a column filter.
///
/// A scalar is matched as a case-insensitive substring; a list is matched by
/// set membership (any element equal to the cell value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Set membership: `value in [..]`.
    Multi(Vec<String>),
    /// Substring match: `value contains '..'`.
    Scalar(String),
}

impl FilterValue {
    /// Creates a substring filter value.
    pub fn scalar(value: impl Into<String>) -> Self {
        FilterValue::Scalar(value.into())
    }

    /// Creates a set-membership filter value.
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Multi(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if this value imposes no constraint.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Multi(values) => values.is_empty(),
            FilterValue::Scalar(value) => value.is_empty(),
        }
    }

    /// Returns the checked options of a set-membership value.
    pub fn options(&self) -> &[String] {
        match self {
            FilterValue::Multi(values) => values,
            FilterValue::Scalar(_) => &[],
        }
    }
}

/// One active filter column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    /// The filtered column.
    pub id: String,
    /// The filter value; `None` while the editor is open but empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
}

/// Active filter columns with their values, in activation order.
///
/// A column can be active without a value (its editor is shown but nothing
/// is constrained yet). Only columns with a non-empty value filter rows, and
/// they are applied in the order they were activated.
///
/// # Example
///
/// ```
/// use dataview_lib::state::{ColumnFilters, FilterValue};
///
/// let mut filters = ColumnFilters::default();
/// filters.activate("status");
/// filters.toggle_option("status", "active", true);
/// assert_eq!(filters.value("status"), Some(&FilterValue::multi(["active"])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnFilters {
    active: Vec<ColumnFilter>,
}

impl ColumnFilters {
    /// Returns the active filter columns in activation order.
    pub fn active(&self) -> &[ColumnFilter] {
        &self.active
    }

    /// Returns the ids of active filter columns in activation order.
    pub fn active_ids(&self) -> Vec<&str> {
        self.active.iter().map(|f| f.id.as_str()).collect()
    }

    /// Returns `true` if no filter column is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns `true` if the column has an open filter.
    pub fn is_active(&self, column_id: &str) -> bool {
        self.active.iter().any(|f| f.id == column_id)
    }

    /// Returns the filter value for a column, if one is set.
    pub fn value(&self, column_id: &str) -> Option<&FilterValue> {
        self.active
            .iter()
            .find(|f| f.id == column_id)
            .and_then(|f| f.value.as_ref())
    }

    /// Returns the non-empty constraints in activation order.
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.active.iter().filter_map(|f| match &f.value {
            Some(value) if !value.is_empty() => Some((f.id.as_str(), value)),
            _ => None,
        })
    }

    /// Opens a filter on a column. Returns `false` if it is already active.
    pub fn activate(&mut self, column_id: &str) -> bool {
        if self.is_active(column_id) {
            return false;
        }
        self.active.push(ColumnFilter {
            id: column_id.to_string(),
            value: None,
        });
        true
    }

    /// Closes a column filter and drops its value. Returns `false` if it was
    /// not active.
    pub fn deactivate(&mut self, column_id: &str) -> bool {
        let before = self.active.len();
        self.active.retain(|f| f.id != column_id);
        self.active.len() != before
    }

    /// Replaces the value of an active filter. Empty values clear it.
    ///
    /// Returns `false` if the column is not active.
    pub fn set_value(&mut self, column_id: &str, value: FilterValue) -> bool {
        let Some(filter) = self.active.iter_mut().find(|f| f.id == column_id) else {
            return false;
        };
        filter.value = (!value.is_empty()).then_some(value);
        true
    }

    /// Checks or unchecks one option of a set-membership filter.
    ///
    /// Checking adds the option once; unchecking removes it. A scalar value is
    /// replaced by the option list. An empty list clears the value.
    ///
    /// Returns `false` if the column is not active.
    pub fn toggle_option(&mut self, column_id: &str, option: &str, checked: bool) -> bool {
        let Some(filter) = self.active.iter_mut().find(|f| f.id == column_id) else {
            return false;
        };

        let mut options = match filter.value.take() {
            Some(FilterValue::Multi(options)) => options,
            _ => Vec::new(),
        };
        if checked {
            if !options.iter().any(|o| o == option) {
                options.push(option.to_string());
            }
        } else {
            options.retain(|o| o != option);
        }

        filter.value = (!options.is_empty()).then_some(FilterValue::Multi(options));
        true
    }

    /// Closes every filter.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Keeps only filters whose column passes `keep`, once per column, with
    /// empty values normalized away.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let mut seen: Vec<String> = Vec::new();
        self.active.retain(|f| {
            if seen.contains(&f.id) || !keep(&f.id) {
                return false;
            }
            seen.push(f.id.clone());
            true
        });
        for filter in &mut self.active {
            if let Some(FilterValue::Multi(options)) = &mut filter.value {
                let mut unique: Vec<String> = Vec::with_capacity(options.len());
                for option in options.drain(..) {
                    if !unique.contains(&option) {
                        unique.push(option);
                    }
                }
                *options = unique;
            }
            if filter.value.as_ref().is_some_and(FilterValue::is_empty) {
                filter.value = None;
            }
        }
    }
}
