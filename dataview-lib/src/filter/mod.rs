//! Filter engine
//!
//! Pure functions over a row snapshot: the global search, per-column
//! predicates, and faceted value counts. Results are row indices into the
//! snapshot, which is never modified.

mod engine;
mod predicate;

pub use engine::FilterEngine;
pub use predicate::default_predicate;
pub use predicate::matches_search;
