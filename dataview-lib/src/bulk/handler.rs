//! Delete handler trait

use std::future::Future;

use async_trait::async_trait;

use crate::error::HandlerError;

/// Deletes records by identity.
///
/// Called once per bulk delete with every selected id. The handler talks to
/// whatever backend owns the records; a failure leaves the selection intact
/// so the user can retry.
///
/// Any `Fn(Vec<String>) -> impl Future<Output = Result<(), HandlerError>>`
/// closure is a handler.
///
/// # Example
///
/// ```
/// use dataview_lib::bulk::DeleteHandler;
/// use dataview_lib::error::HandlerError;
///
/// struct Products;
///
/// #[async_trait::async_trait]
/// impl DeleteHandler for Products {
///     async fn delete(&self, ids: Vec<String>) -> Result<(), HandlerError> {
///         if ids.iter().any(|id| id == "locked") {
///             return Err("product is locked".into());
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait DeleteHandler: Send + Sync {
    /// Deletes the records with the given ids.
    async fn delete(&self, ids: Vec<String>) -> Result<(), HandlerError>;
}

#[async_trait]
impl<F, Fut> DeleteHandler for F
where
    F: Fn(Vec<String>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    async fn delete(&self, ids: Vec<String>) -> Result<(), HandlerError> {
        (self)(ids).await
    }
}
