//! Column model build errors

/// Contract violations detected while building a column model.
///
/// These are developer errors in the table definition, not runtime input
/// errors, so they are reported once at composition time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Two descriptors share the same column id.
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(String),

    /// A data descriptor uses an id reserved for a structural column.
    #[error("column id '{0}' is reserved")]
    ReservedColumnId(String),

    /// A data descriptor has an empty id.
    #[error("column id must not be empty")]
    EmptyColumnId,
}
