//! Whole-state query string encoding

use url::form_urlencoded;

use super::StateCodec;
use super::decode_page;
use super::decode_page_size;
use super::encode_page;
use super::encode_page_size;
use crate::config::TableConfig;
use crate::state::ColumnFilters;
use crate::state::ColumnVisibility;
use crate::state::RowSelection;
use crate::state::Sorting;
use crate::state::TableState;

/// Encodes a view state as a query string (without the leading `?`).
///
/// Only non-default parameters are written, so a fresh view encodes to an
/// empty string. The selection is written only when
/// [`TableConfig::persist_selection`] is set.
pub fn encode_query(state: &TableState, config: &TableConfig) -> String {
    let names = &config.params;
    let mut query = form_urlencoded::Serializer::new(String::new());

    if state.pagination.page_index() > 0 {
        query.append_pair(&names.page, &encode_page(state.pagination.page_index()));
    }
    if state.pagination.page_size() != config.default_page_size {
        query.append_pair(&names.page_size, &encode_page_size(state.pagination.page_size()));
    }
    if !state.sorting.is_empty() {
        query.append_pair(&names.sort, &state.sorting.encode());
    }
    if !state.filters.is_empty() {
        query.append_pair(&names.filters, &state.filters.encode());
    }
    if !state.visibility.is_empty() {
        query.append_pair(&names.columns, &state.visibility.encode());
    }
    if config.persist_selection && !state.selection.is_empty() {
        query.append_pair(&names.select, &state.selection.encode());
    }
    if state.select_mode {
        query.append_pair(&names.select_mode, &state.select_mode.encode());
    }
    if !state.global_filter.is_empty() {
        query.append_pair(&names.search, &state.global_filter.encode());
    }

    query.finish()
}

/// Decodes a query string into a view state.
///
/// A leading `?` is ignored, unknown parameters are ignored, and each
/// malformed parameter falls back to its default independently. The result
/// still has to be reconciled against the column model before use.
pub fn decode_query(query: &str, config: &TableConfig) -> TableState {
    let names = &config.params;
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = TableState::with_page_size(config.default_page_size);

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let key = key.as_ref();
        if key == names.page {
            state.pagination.set_page_index(decode_page(&value));
        } else if key == names.page_size {
            state
                .pagination
                .set_page_size(decode_page_size(&value, config.default_page_size));
        } else if key == names.sort {
            state.sorting = Sorting::decode(&value);
        } else if key == names.filters {
            state.filters = ColumnFilters::decode(&value);
        } else if key == names.columns {
            state.visibility = ColumnVisibility::decode(&value);
        } else if key == names.select {
            if config.persist_selection {
                state.selection = RowSelection::decode(&value);
            }
        } else if key == names.select_mode {
            state.select_mode = bool::decode(&value);
        } else if key == names.search {
            state.global_filter = String::decode(&value);
        } else {
            log::trace!("Ignoring unknown query parameter {:?}", key);
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Direction;
    use crate::state::FilterValue;
    use crate::state::Pagination;

    fn sample_state() -> TableState {
        let mut state = TableState::with_page_size(25);
        state.pagination = Pagination::new(2, 25);
        state.sorting = Sorting::by("price", Direction::Desc);
        state.filters.activate("status");
        state.filters.toggle_option("status", "active", true);
        state.filters.activate("name");
        state.filters.set_value("name", FilterValue::scalar("a&b=c?"));
        state.visibility.set("sku", false);
        state.selection.select_all(["r1", "r 2"]);
        state.select_mode = true;
        state.global_filter = "blue dream".to_string();
        state
    }

    #[test]
    fn test_default_state_encodes_empty() {
        let config = TableConfig::default();
        let state = TableState::with_page_size(config.default_page_size);
        assert_eq!(encode_query(&state, &config), "");
        assert_eq!(decode_query("", &config), state);
    }

    #[test]
    fn test_round_trip_with_persisted_selection() {
        let config = TableConfig::default().with_persist_selection(true);
        let state = sample_state();
        let query = encode_query(&state, &config);
        assert_eq!(decode_query(&query, &config), state);
        assert_eq!(decode_query(&format!("?{query}"), &config), state);
    }

    #[test]
    fn test_selection_not_written_by_default() {
        let config = TableConfig::default();
        let state = sample_state();
        let query = encode_query(&state, &config);
        assert!(!query.contains("select="));
        let decoded = decode_query(&query, &config);
        assert!(decoded.selection.is_empty());
        assert_eq!(decoded.sorting, state.sorting);
    }

    #[test]
    fn test_page_is_one_based() {
        let config = TableConfig::default();
        let mut state = TableState::default();
        state.pagination.set_page_index(2);
        assert_eq!(encode_query(&state, &config), "page=3");
    }

    #[test]
    fn test_malformed_params_fall_back_independently() {
        let config = TableConfig::default();
        let state = decode_query(
            "page=abc&pageSize=0&sort=%7Bbad&search=kush&selectMode=1&junk=%%",
            &config,
        );
        assert_eq!(state.pagination, Pagination::default());
        assert!(state.sorting.is_empty());
        assert!(!state.select_mode);
        assert_eq!(state.global_filter, "kush");
    }

    #[test]
    fn test_custom_param_names() {
        let mut config = TableConfig::default();
        config.params.search = "q".to_string();
        let mut state = TableState::default();
        state.global_filter = "gummies".to_string();
        assert_eq!(encode_query(&state, &config), "q=gummies");
        assert_eq!(decode_query("q=gummies&search=x", &config), state);
    }
}
