//! Tabular data-view controller
//!
//! Sorting, filtering, pagination, column visibility and row selection over an
//! in-memory row snapshot, with the whole view state mirrored into a URL query
//! string so table views stay shareable and back-button safe.

pub mod bulk;
pub mod codec;
pub mod columns;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod prefetch;
pub mod state;
pub mod view;

pub use config::TableConfig;
pub use view::DataView;
pub use view::ViewProjection;
