//! Default filter predicates

use crate::model::Value;
use crate::state::FilterValue;

/// The default column predicate.
///
/// - empty filter values impose no constraint
/// - null cells never pass a non-empty filter
/// - [`FilterValue::Multi`]: the cell's string form equals any option
/// - [`FilterValue::Scalar`]: case-insensitive substring match
pub fn default_predicate(value: &Value, filter: &FilterValue) -> bool {
    if filter.is_empty() {
        return true;
    }
    let Some(text) = value.to_filter_string() else {
        return false;
    };
    match filter {
        FilterValue::Multi(options) => options.iter().any(|option| *option == text),
        FilterValue::Scalar(needle) => text.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Returns `true` if a cell matches a lowercased search needle.
pub fn matches_search(value: &Value, needle_lower: &str) -> bool {
    value
        .to_filter_string()
        .is_some_and(|text| text.to_lowercase().contains(needle_lower))
}
