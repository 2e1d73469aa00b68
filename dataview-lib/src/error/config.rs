//! Configuration error types

/// Errors that can occur while loading or validating a [`TableConfig`](crate::TableConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A page size of zero was configured.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// The default page size is not one of the offered options.
    #[error("default page size {0} is not among the page size options")]
    UnlistedPageSize(usize),
}
