//! Bulk action errors

use std::time::Duration;

use super::HandlerError;

/// Errors surfaced by the bulk delete coordinator.
#[derive(Debug, thiserror::Error)]
pub enum BulkError {
    /// The injected delete handler rejected the request.
    #[error("bulk delete failed: {0}")]
    Handler(#[source] HandlerError),

    /// The delete handler did not settle within the configured timeout.
    #[error("bulk delete timed out after {0:?}")]
    Timeout(Duration),
}

impl BulkError {
    /// Returns `true` if the handler did not settle in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
