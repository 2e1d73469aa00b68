//! Table configuration

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::Deserializer;

use crate::error::ConfigError;
use crate::state::DEFAULT_PAGE_SIZE;

/// Query parameter names used for each piece of view state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParamNames {
    /// 1-based page number.
    pub page: String,
    /// Rows per page.
    pub page_size: String,
    /// Sort descriptor.
    pub sort: String,
    /// Column filters.
    pub filters: String,
    /// Column visibility.
    pub columns: String,
    /// Row selection.
    pub select: String,
    /// Select mode flag.
    pub select_mode: String,
    /// Global search.
    pub search: String,
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            page: "page".into(),
            page_size: "pageSize".into(),
            sort: "sort".into(),
            filters: "filters".into(),
            columns: "columns".into(),
            select: "select".into(),
            select_mode: "selectMode".into(),
            search: "search".into(),
        }
    }
}

/// Configuration for a table view.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use dataview_lib::TableConfig;
///
/// let config = TableConfig::default()
///     .with_default_page_size(25)
///     .with_page_size_options(vec![10, 25, 50])
///     .with_delete_timeout(Duration::from_secs(30));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page size of a fresh view.
    ///
    /// Default: 15
    pub default_page_size: usize,

    /// Page sizes offered by the page size picker.
    ///
    /// Default: 10, 15, 25, 50, 100
    pub page_size_options: Vec<usize>,

    /// Query parameter names.
    pub params: ParamNames,

    /// Whether the row selection is written to the URL.
    ///
    /// Default: false
    pub persist_selection: bool,

    /// How long a bulk delete may take before it is reported as timed out.
    ///
    /// Default: none (wait indefinitely)
    #[serde(rename = "delete_timeout_ms", deserialize_with = "deserialize_millis")]
    pub delete_timeout: Option<Duration>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 15, 25, 50, 100],
            params: ParamNames::default(),
            persist_selection: false,
            delete_timeout: None,
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Sets the default page size.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the page size options.
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Sets the query parameter names.
    pub fn with_params(mut self, params: ParamNames) -> Self {
        self.params = params;
        self
    }

    /// Sets whether the row selection is written to the URL.
    pub fn with_persist_selection(mut self, persist: bool) -> Self {
        self.persist_selection = persist;
        self
    }

    /// Sets the bulk delete timeout.
    pub fn with_delete_timeout(mut self, timeout: Duration) -> Self {
        self.delete_timeout = Some(timeout);
        self
    }

    /// Checks page size settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 || self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.page_size_options.is_empty()
            && !self.page_size_options.contains(&self.default_page_size)
        {
            return Err(ConfigError::UnlistedPageSize(self.default_page_size));
        }
        Ok(())
    }
}

fn deserialize_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TableConfig::default();
        assert_eq!(config.default_page_size, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = TableConfig::from_json_str(
            r#"{"default_page_size": 25, "delete_timeout_ms": 1500, "params": {"search": "q"}}"#,
        )
        .unwrap();
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.delete_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(config.params.search, "q");
        assert_eq!(config.params.page, "page");
    }

    #[test]
    fn test_validate_rejects_zero_and_unlisted() {
        assert!(matches!(
            TableConfig::default().with_default_page_size(0).validate(),
            Err(ConfigError::ZeroPageSize)
        ));
        assert!(matches!(
            TableConfig::default().with_default_page_size(12).validate(),
            Err(ConfigError::UnlistedPageSize(12))
        ));
        assert!(
            TableConfig::default()
                .with_default_page_size(12)
                .with_page_size_options(Vec::new())
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            TableConfig::from_json_str("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
