//! Bulk delete coordinator

use std::time::Duration;

use super::DeleteHandler;
use crate::config::TableConfig;
use crate::error::BulkError;
use crate::model::TableRow;
use crate::view::DataView;

/// Deletes the selected rows of a view through a [`DeleteHandler`].
///
/// Concurrent calls are not deduplicated; callers that need that should
/// disable the trigger while a delete is in flight.
///
/// # Example
///
/// ```
/// use dataview_lib::bulk::BulkDelete;
/// use dataview_lib::columns::{ColumnDescriptor, ColumnModel};
/// use dataview_lib::error::HandlerError;
/// use dataview_lib::model::{Record, TableRow};
/// use dataview_lib::{DataView, TableConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let columns = ColumnModel::build(vec![ColumnDescriptor::field("name", "Name")], None, true).unwrap();
/// let rows = vec![Record::new("a"), Record::new("b"), Record::new("c")];
/// let mut view = DataView::new(columns, rows, TableConfig::default());
/// view.toggle_row_selected("a");
/// view.toggle_row_selected("c");
///
/// let bulk = BulkDelete::new(|ids: Vec<String>| async move {
///     assert_eq!(ids, vec!["a", "c"]);
///     Ok::<(), HandlerError>(())
/// });
/// let deleted = bulk.delete_selected(&mut view, |row| row.id()).await.unwrap();
///
/// assert_eq!(deleted, 2);
/// assert_eq!(view.selected_count(), 0);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BulkDelete<H> {
    handler: H,
    timeout: Option<Duration>,
}

impl<H: DeleteHandler> BulkDelete<H> {
    /// Creates a coordinator with no timeout.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            timeout: None,
        }
    }

    /// Creates a coordinator using the delete timeout from a table config.
    pub fn from_config(handler: H, config: &TableConfig) -> Self {
        Self {
            handler,
            timeout: config.delete_timeout,
        }
    }

    /// Gives up on the handler after `timeout`.
    ///
    /// A timed out delete is reported as [`BulkError::Timeout`] and keeps the
    /// selection, even though the backend may still complete it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Deletes every selected row present in the view's snapshot.
    ///
    /// `id_accessor` maps a row to the id the handler expects, which need not
    /// be the row's selection identity. The handler is called exactly once
    /// with all ids, in snapshot order. On success the selection is cleared
    /// and the page re-clamped; the row snapshot itself is left to the host,
    /// which should refetch and call [`DataView::set_rows`].
    ///
    /// Returns the number of ids handed to the handler. An empty selection
    /// returns `Ok(0)` without calling it.
    ///
    /// # Errors
    ///
    /// Returns [`BulkError::Handler`] if the handler fails and
    /// [`BulkError::Timeout`] if it does not settle in time. The selection is
    /// untouched in both cases.
    pub async fn delete_selected<R, F>(
        &self,
        view: &mut DataView<R>,
        id_accessor: F,
    ) -> Result<usize, BulkError>
    where
        R: TableRow,
        F: Fn(&R) -> String,
    {
        let ids: Vec<String> = view
            .selected_rows()
            .into_iter()
            .map(&id_accessor)
            .collect();
        if ids.is_empty() {
            log::debug!("Bulk delete skipped: nothing selected");
            return Ok(0);
        }

        let count = ids.len();
        log::info!("Deleting {} selected rows", count);

        let call = self.handler.delete(ids);
        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result.map_err(BulkError::Handler),
                Err(_) => Err(BulkError::Timeout(limit)),
            },
            None => call.await.map_err(BulkError::Handler),
        };

        match result {
            Ok(()) => {
                view.finish_bulk_delete();
                log::debug!("Deleted {} rows, selection cleared", count);
                Ok(count)
            }
            Err(e) => {
                log::warn!("Bulk delete of {} rows failed: {}", count, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::columns::ColumnDescriptor;
    use crate::columns::ColumnModel;
    use crate::error::HandlerError;
    use crate::model::Record;

    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl DeleteHandler for Recording {
        async fn delete(&self, ids: Vec<String>) -> Result<(), HandlerError> {
            self.calls.lock().unwrap().push(ids);
            Ok(())
        }
    }

    fn view(n: usize) -> DataView<Record> {
        let columns =
            ColumnModel::build(vec![ColumnDescriptor::field("name", "Name")], None, true).unwrap();
        let rows: Vec<Record> = (0..n)
            .map(|i| Record::new(format!("r{i}")).set("name", format!("Row {i}")).set("sku", format!("SKU{i}")))
            .collect();
        DataView::new(columns, rows, TableConfig::default())
    }

    #[tokio::test]
    async fn test_empty_selection_skips_handler() {
        let mut view = view(3);
        let bulk = BulkDelete::new(Recording::default());
        assert_eq!(bulk.delete_selected(&mut view, |r| r.id()).await.unwrap(), 0);
        assert!(bulk.handler().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_single_call_with_mapped_ids() {
        let mut view = view(4);
        view.toggle_row_selected("r3");
        view.toggle_row_selected("r1");

        let bulk = BulkDelete::new(Recording::default());
        let deleted = bulk
            .delete_selected(&mut view, |r| r.value("sku").to_string())
            .await
            .unwrap();

        assert_eq!(deleted, 2);
        assert_eq!(
            *bulk.handler().calls.lock().unwrap(),
            vec![vec!["SKU1".to_string(), "SKU3".to_string()]]
        );
        assert_eq!(view.selected_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_keeps_selection() {
        let mut view = view(3);
        view.toggle_row_selected("r0");
        view.toggle_row_selected("r2");

        let bulk = BulkDelete::new(|_ids: Vec<String>| async move {
            Err::<(), HandlerError>("backend unavailable".into())
        });
        let err = bulk.delete_selected(&mut view, |r| r.id()).await.unwrap_err();

        assert!(matches!(err, BulkError::Handler(_)));
        assert_eq!(err.to_string(), "bulk delete failed: backend unavailable");
        assert_eq!(view.selected_ids(), vec!["r0", "r2"]);
    }

    #[tokio::test]
    async fn test_timeout_keeps_selection() {
        let mut view = view(2);
        view.toggle_row_selected("r1");

        let bulk = BulkDelete::new(|_ids: Vec<String>| async move {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<(), HandlerError>(())
        })
        .with_timeout(Duration::from_millis(20));
        let err = bulk.delete_selected(&mut view, |r| r.id()).await.unwrap_err();

        assert!(err.is_timeout());
        assert!(view.is_row_selected("r1"));
    }

    #[tokio::test]
    async fn test_selection_outside_snapshot_is_ignored() {
        let columns =
            ColumnModel::build(vec![ColumnDescriptor::field("name", "Name")], None, true).unwrap();
        let config = TableConfig::default().with_persist_selection(true);
        let query = "select=%7B%22gone%22%3Atrue%2C%22r0%22%3Atrue%7D";
        let mut view = DataView::from_query(columns, vec![Record::new("r0")], config, query);
        assert_eq!(view.selected_count(), 2);

        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let bulk = BulkDelete::new(move |ids: Vec<String>| {
            sink.lock().unwrap().push(ids);
            async move { Ok::<(), HandlerError>(()) }
        });
        assert_eq!(bulk.delete_selected(&mut view, |r| r.id()).await.unwrap(), 1);
        assert_eq!(*calls.lock().unwrap(), vec![vec!["r0".to_string()]]);
        assert_eq!(view.selected_count(), 0);
    }

    #[test]
    fn test_timeout_from_config() {
        let config = TableConfig::default().with_delete_timeout(Duration::from_secs(5));
        let bulk = BulkDelete::from_config(Recording::default(), &config);
        assert_eq!(bulk.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(BulkDelete::new(Recording::default()).timeout(), None);
    }
}
