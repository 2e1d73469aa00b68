//! Bulk actions over the selected rows
//!
//! The coordinator collects the selection, hands the whole id list to an
//! injected [`DeleteHandler`] in one call, and clears the selection only when
//! the handler succeeds.

mod coordinator;
mod handler;

pub use coordinator::*;
pub use handler::*;
