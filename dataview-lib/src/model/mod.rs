//! Row model
//!
//! Rows are owned by the host application; the view only needs a stable
//! identity per row and a [`Value`] per cell, extracted by column accessors.

mod record;
mod value;

pub use record::Record;
pub use value::Value;

/// A row that can be displayed in a [`DataView`](crate::DataView).
///
/// The identity must be stable across sorting, filtering, and re-fetches of
/// the same record: selection is keyed by it, not by position.
///
/// # Example
///
/// ```
/// use dataview_lib::model::TableRow;
///
/// struct Product {
///     sku: String,
///     name: String,
/// }
///
/// impl TableRow for Product {
///     fn id(&self) -> String {
///         self.sku.clone()
///     }
/// }
/// ```
pub trait TableRow {
    /// Unique identity of this row.
    fn id(&self) -> String;
}
