//! Tests for the bulk delete coordinator.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dataview_lib::bulk::BulkDelete;
use dataview_lib::columns::{ColumnDescriptor, ColumnModel};
use dataview_lib::error::{BulkError, HandlerError};
use dataview_lib::model::{Record, TableRow};
use dataview_lib::{DataView, TableConfig};

fn view(ids: &[&str]) -> DataView<Record> {
    let columns =
        ColumnModel::build(vec![ColumnDescriptor::field("name", "Name")], None, true).unwrap();
    let rows: Vec<Record> = ids
        .iter()
        .map(|id| Record::new(*id).set("name", id.to_uppercase()))
        .collect();
    DataView::new(columns, rows, TableConfig::default())
}

#[tokio::test]
async fn test_failure_leaves_selection_and_returns_error() {
    let mut view = view(&["a", "b", "c"]);
    view.toggle_row_selected("a");
    view.toggle_row_selected("b");

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let bulk = BulkDelete::new(move |_ids: Vec<String>| {
        counter.fetch_add(1, Ordering::SeqCst);
        async move { Err::<(), HandlerError>("foreign key violation".into()) }
    });

    let err = bulk.delete_selected(&mut view, |r| r.id()).await.unwrap_err();
    assert!(matches!(err, BulkError::Handler(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(view.selected_ids(), vec!["a", "b"]);
}

#[tokio::test]
async fn test_success_clears_selection() {
    let mut view = view(&["a", "b", "c"]);
    view.toggle_select_all();
    assert_eq!(view.selected_count(), 3);

    let bulk = BulkDelete::new(|ids: Vec<String>| async move {
        assert_eq!(ids, vec!["a", "b", "c"]);
        Ok::<(), HandlerError>(())
    });
    assert_eq!(bulk.delete_selected(&mut view, |r| r.id()).await.unwrap(), 3);
    assert_eq!(view.selected_count(), 0);

    // The host refetches and replaces the snapshot
    view.set_rows(Vec::<Record>::new());
    assert!(view.projection().is_empty());
}

#[tokio::test]
async fn test_retry_after_failure() {
    let mut view = view(&["a", "b"]);
    view.toggle_row_selected("b");

    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let bulk = BulkDelete::new(move |_ids: Vec<String>| {
        let attempt = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if attempt == 0 {
                Err::<(), HandlerError>("temporarily unavailable".into())
            } else {
                Ok(())
            }
        }
    });

    assert!(bulk.delete_selected(&mut view, |r| r.id()).await.is_err());
    assert!(view.is_row_selected("b"));
    assert_eq!(bulk.delete_selected(&mut view, |r| r.id()).await.unwrap(), 1);
    assert!(!view.is_row_selected("b"));
}
