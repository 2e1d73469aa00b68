//! Error types

mod build;
mod bulk;
mod config;

pub use build::*;
pub use bulk::*;
pub use config::*;

/// Boxed error returned by injected collaborators (delete handlers).
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
