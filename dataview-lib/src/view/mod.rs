//! View controller
//!
//! [`DataView`] owns the table state and recomputes the projection after
//! every operation: global search → column filters → sort → page slice.
//! Selection and visibility are overlays keyed by identity, so they survive
//! re-sorting and re-filtering.

mod controller;
mod projection;
mod sort;

pub use controller::DataView;
pub use projection::PageSelection;
pub use projection::ViewProjection;
pub use sort::sort_indices;
