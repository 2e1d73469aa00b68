//! Column kinds and capabilities

/// Reserved id of the selection column.
pub const SELECT_COLUMN_ID: &str = "select";

/// Reserved id of the row actions column.
pub const ACTIONS_COLUMN_ID: &str = "actions";

/// Returns `true` if `id` belongs to a structural column.
pub fn is_reserved(id: &str) -> bool {
    id == SELECT_COLUMN_ID || id == ACTIONS_COLUMN_ID
}

/// What a user may do with a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Column can be sorted.
    pub sortable: bool,
    /// Column can be hidden.
    pub hideable: bool,
    /// Column can be filtered and takes part in the global search.
    pub filterable: bool,
}

impl Capabilities {
    /// Everything allowed; the default for data columns.
    pub const ALL: Self = Self {
        sortable: true,
        hideable: true,
        filterable: true,
    };

    /// Nothing allowed; what structural columns get.
    pub const NONE: Self = Self {
        sortable: false,
        hideable: false,
        filterable: false,
    };
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// The kind of a column in a built model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A column backed by an accessor.
    Data(Capabilities),
    /// The leading checkbox column.
    Selection,
    /// The trailing row actions column.
    Actions,
}

impl ColumnKind {
    /// Returns the effective capabilities of this kind.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            ColumnKind::Data(capabilities) => *capabilities,
            ColumnKind::Selection | ColumnKind::Actions => Capabilities::NONE,
        }
    }

    /// Returns `true` for selection and actions columns.
    pub fn is_structural(&self) -> bool {
        !matches!(self, ColumnKind::Data(_))
    }
}
