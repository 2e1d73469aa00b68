//! Column model
//!
//! Declarative [`ColumnDescriptor`]s are turned into an ordered
//! [`ColumnModel`]: a selection column, the data columns, and an optional
//! actions column. Structural columns have fixed capabilities (see
//! [`ColumnKind`]).
//!
//! # Example
//!
//! ```
//! use dataview_lib::columns::{ActionConfig, ColumnDescriptor, ColumnModel};
//! use dataview_lib::model::Record;
//!
//! let columns = ColumnModel::build(
//!     vec![
//!         ColumnDescriptor::field("name", "Name"),
//!         ColumnDescriptor::field("price", "Price").not_filterable(),
//!     ],
//!     Some(ActionConfig::new().on_view(|_: &Record| {})),
//!     false,
//! )
//! .unwrap();
//!
//! let ids: Vec<_> = columns.columns().iter().map(|c| c.id.as_str()).collect();
//! assert_eq!(ids, vec!["select", "name", "price", "actions"]);
//! ```

mod actions;
mod descriptor;
mod kind;
mod model;

pub use actions::ActionConfig;
pub use actions::CustomAction;
pub use actions::RowAction;
pub use actions::RowCallback;
pub use descriptor::Accessor;
pub use descriptor::ColumnDescriptor;
pub use descriptor::FilterPredicate;
pub use kind::ACTIONS_COLUMN_ID;
pub use kind::Capabilities;
pub use kind::ColumnKind;
pub use kind::SELECT_COLUMN_ID;
pub use kind::is_reserved;
pub use model::ColumnDef;
pub use model::ColumnModel;
