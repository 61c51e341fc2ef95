//! Integration tests for the windowed lazy-completion section list
//!
//! Covers the behaviour a browse UI depends on:
//! - one bounded batch per uncompleted window, never one fetch per row
//! - de-duplication of repeated and overlapping requests
//! - window expansion across section boundaries
//! - cache hits, filter views, and failure recovery

use chorus_browse::{
    BrowseError, Coordinate, ItemUpdate, LoadStatus, SectionItem, SectionedList, WINDOW_RADIUS,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::timeout;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: String,
    title: String,
    completed: bool,
}

impl Entry {
    fn placeholder(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: format!("pending {id}"),
            id,
            completed: false,
        }
    }

    fn complete(mut self) -> Self {
        self.title = format!("Full {}", self.id);
        self.completed = true;
        self
    }
}

impl SectionItem for Entry {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &str) -> bool {
        self.title.to_uppercase().contains(&filter.to_uppercase())
    }
}

/// Records every batch the completion function receives.
#[derive(Clone, Default)]
struct FetchLog {
    batches: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FetchLog {
    fn record(&self, items: &[Entry]) {
        self.batches
            .lock()
            .unwrap()
            .push(items.iter().map(|item| item.id.clone()).collect());
    }

    fn call_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    fn batch(&self, index: usize) -> Vec<String> {
        self.batches.lock().unwrap()[index].clone()
    }
}

fn entries(prefix: &str, count: usize) -> Vec<Entry> {
    (0..count)
        .map(|index| Entry::placeholder(format!("{prefix}{index}")))
        .collect()
}

fn sections(sections: Vec<(&str, Vec<Entry>)>) -> Vec<(String, Vec<Entry>)> {
    sections
        .into_iter()
        .map(|(title, items)| (title.to_string(), items))
        .collect()
}

/// A list whose completion function resolves immediately.
fn completing_list(
    input: Vec<(&str, Vec<Entry>)>,
    log: FetchLog,
) -> SectionedList<Entry> {
    SectionedList::new(sections(input), move |items: Vec<Entry>| {
        log.record(&items);
        async move { Ok(items.into_iter().map(Entry::complete).collect()) }
    })
}

/// A list whose completion function blocks until `gate` is notified.
fn gated_list(
    input: Vec<(&str, Vec<Entry>)>,
    log: FetchLog,
    gate: Arc<Notify>,
) -> SectionedList<Entry> {
    SectionedList::new(sections(input), move |items: Vec<Entry>| {
        log.record(&items);
        let gate = Arc::clone(&gate);
        async move {
            gate.notified().await;
            Ok(items.into_iter().map(Entry::complete).collect())
        }
    })
}

/// Await the next update on a receiver, failing the test on a hang.
async fn next_update(
    receiver: &mut tokio::sync::watch::Receiver<ItemUpdate<Entry>>,
) -> ItemUpdate<Entry> {
    timeout(Duration::from_secs(1), receiver.changed())
        .await
        .expect("update not delivered in time")
        .expect("channel closed");
    receiver.borrow().clone()
}

// ============================================================================
// Batching and window bounds
// ============================================================================

#[tokio::test]
async fn test_one_request_completes_a_small_collection() {
    // Scenario A: 30 rows in each direction exceeds the collection size,
    // so a single request fetches all five items in one batch.
    let log = FetchLog::default();
    let list = completing_list(
        vec![
            ("A", vec![
                Entry::placeholder("i1"),
                Entry::placeholder("i2"),
                Entry::placeholder("i3"),
            ]),
            ("B", vec![Entry::placeholder("i4"), Entry::placeholder("i5")]),
        ],
        log.clone(),
    );

    let mut updates = list.request(Coordinate::new(0, 1)).expect("valid coordinate");
    let update = next_update(&mut updates).await;

    assert!(update.is_complete());
    assert_eq!(update.item().id, "i2");

    assert_eq!(log.call_count(), 1);
    let batch: HashSet<String> = log.batch(0).into_iter().collect();
    assert_eq!(batch.len(), 5);

    for coordinate in [
        Coordinate::new(0, 0),
        Coordinate::new(0, 1),
        Coordinate::new(0, 2),
        Coordinate::new(1, 0),
        Coordinate::new(1, 1),
    ] {
        assert_eq!(list.load_status(coordinate), Some(LoadStatus::Complete));
        assert!(list.value_at(coordinate).expect("in range").completed);
    }
}

#[tokio::test]
async fn test_window_is_bounded_in_a_long_list() {
    let log = FetchLog::default();
    let list = completing_list(vec![("All", entries("row", 200))], log.clone());

    let mut updates = list.request(Coordinate::new(0, 100)).expect("valid coordinate");
    next_update(&mut updates).await;

    assert_eq!(log.call_count(), 1);
    let batch = log.batch(0);
    assert_eq!(batch.len(), 2 * WINDOW_RADIUS + 1);

    let batch: HashSet<String> = batch.into_iter().collect();
    assert!(batch.contains("row70"));
    assert!(batch.contains("row130"));
    assert!(!batch.contains("row69"));
    assert!(!batch.contains("row131"));

    assert_eq!(
        list.load_status(Coordinate::new(0, 69)),
        Some(LoadStatus::Initial)
    );
    assert_eq!(
        list.load_status(Coordinate::new(0, 130)),
        Some(LoadStatus::Complete)
    );
}

#[tokio::test]
async fn test_window_skips_already_completed_rows() {
    let log = FetchLog::default();
    let list = completing_list(vec![("All", entries("row", 200))], log.clone());

    let mut updates = list.request(Coordinate::new(0, 100)).expect("valid coordinate");
    next_update(&mut updates).await;

    // Rows 70..=130 are complete now; a request just past the window edge
    // only fetches the uncompleted side.
    let mut updates = list.request(Coordinate::new(0, 131)).expect("valid coordinate");
    next_update(&mut updates).await;

    assert_eq!(log.call_count(), 2);
    let batch = log.batch(1);
    assert_eq!(batch.len(), WINDOW_RADIUS + 1);
    assert!(batch.contains(&"row131".to_string()));
    assert!(batch.contains(&"row161".to_string()));
}

#[tokio::test]
async fn test_window_crosses_section_boundaries() {
    let log = FetchLog::default();
    let list = completing_list(
        vec![("A", entries("a", 40)), ("B", entries("b", 40))],
        log.clone(),
    );

    // Last row of the first section: half the window lands in section B.
    let mut updates = list.request(Coordinate::new(0, 39)).expect("valid coordinate");
    next_update(&mut updates).await;

    let batch: HashSet<String> = log.batch(0).into_iter().collect();
    assert_eq!(batch.len(), 2 * WINDOW_RADIUS + 1);
    assert!(batch.contains("a9"));
    assert!(!batch.contains("a8"));
    assert!(batch.contains("b0"));
    assert!(batch.contains("b29"));
    assert!(!batch.contains("b30"));

    assert_eq!(
        list.load_status(Coordinate::new(1, 0)),
        Some(LoadStatus::Complete)
    );
}

// ============================================================================
// De-duplication and caching
// ============================================================================

#[tokio::test]
async fn test_repeated_requests_share_one_fetch() {
    let log = FetchLog::default();
    let gate = Arc::new(Notify::new());
    let list = gated_list(
        vec![("A", entries("row", 5))],
        log.clone(),
        Arc::clone(&gate),
    );

    let mut first = list.request(Coordinate::new(0, 1)).expect("valid coordinate");
    let second = list.request(Coordinate::new(0, 1)).expect("valid coordinate");
    // A neighbour captured by the in-flight window joins it as well.
    let mut neighbour = list.request(Coordinate::new(0, 3)).expect("valid coordinate");

    assert_eq!(log.call_count(), 1);

    gate.notify_one();

    assert!(next_update(&mut first).await.is_complete());
    assert!(second.borrow().is_complete());
    assert!(next_update(&mut neighbour).await.is_complete());
    assert_eq!(log.call_count(), 1);
}

#[tokio::test]
async fn test_complete_cell_serves_from_cache() {
    // Scenario B: once the first batch resolved, another coordinate from the
    // same window answers instantly with zero additional fetches.
    let log = FetchLog::default();
    let list = completing_list(
        vec![("A", entries("a", 3)), ("B", entries("b", 2))],
        log.clone(),
    );

    let mut updates = list.request(Coordinate::new(0, 1)).expect("valid coordinate");
    next_update(&mut updates).await;
    assert_eq!(log.call_count(), 1);

    let cached = list.request(Coordinate::new(1, 0)).expect("valid coordinate");
    let update = cached.borrow().clone();

    assert!(update.is_complete());
    assert_eq!(update.item().id, "b0");
    assert_eq!(log.call_count(), 1);
}

#[tokio::test]
async fn test_invalid_coordinate_yields_no_stream_and_no_fetch() {
    let log = FetchLog::default();
    let list = completing_list(vec![("A", entries("row", 3))], log.clone());

    assert!(list.request(Coordinate::new(0, 3)).is_none());
    assert!(list.request(Coordinate::new(7, 0)).is_none());
    assert_eq!(log.call_count(), 0);
}

#[tokio::test]
async fn test_dropping_the_receiver_still_warms_the_cache() {
    let log = FetchLog::default();
    let gate = Arc::new(Notify::new());
    let list = gated_list(
        vec![("A", entries("row", 3))],
        log.clone(),
        Arc::clone(&gate),
    );

    let updates = list.request(Coordinate::new(0, 0)).expect("valid coordinate");
    drop(updates);
    gate.notify_one();

    // The fetch was not cancelled: the batch lands in the store regardless.
    timeout(Duration::from_secs(1), async {
        loop {
            if list.load_status(Coordinate::new(0, 0)) == Some(LoadStatus::Complete) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("batch result never applied");

    assert_eq!(log.call_count(), 1);
    assert!(list.value_at(Coordinate::new(0, 0)).expect("in range").completed);
}

// ============================================================================
// Filter views
// ============================================================================

#[tokio::test]
async fn test_filter_fetches_nothing_and_mutates_nothing() {
    let log = FetchLog::default();
    let list = completing_list(
        vec![("A", entries("a", 3)), ("B", entries("b", 2))],
        log.clone(),
    );

    let filtered = list.filter("pending a");

    assert_eq!(log.call_count(), 0);
    assert_eq!(filtered.section_count(), 1);
    assert_eq!(filtered.section_titles(), vec![String::new()]);
    assert_eq!(filtered.row_count(0), 3);

    for row in 0..3 {
        assert_eq!(
            list.load_status(Coordinate::new(0, row)),
            Some(LoadStatus::Initial)
        );
    }
    assert_eq!(
        filtered.load_status(Coordinate::new(0, 0)),
        Some(LoadStatus::Initial)
    );
}

#[tokio::test]
async fn test_filter_sees_completed_values() {
    let log = FetchLog::default();
    let list = completing_list(vec![("A", entries("row", 3))], log.clone());

    // Completed entries are retitled "Full <id>", placeholders "pending <id>".
    assert_eq!(list.filter("full").row_count(0), 0);

    let mut updates = list.request(Coordinate::new(0, 0)).expect("valid coordinate");
    next_update(&mut updates).await;

    let filtered = list.filter("full");
    assert_eq!(filtered.row_count(0), 3);
    assert_eq!(log.call_count(), 1);
}

// ============================================================================
// Failure recovery and edge cases
// ============================================================================

#[tokio::test]
async fn test_failed_batch_resets_cells_and_allows_retry() {
    // Scenario C: the first fetch fails; subscribers get an explicit error
    // instead of hanging, the cells return to their initial state, and a
    // later request retries successfully.
    let log = FetchLog::default();
    let attempts = Arc::new(AtomicUsize::new(0));
    let list = {
        let log = log.clone();
        let attempts = Arc::clone(&attempts);
        SectionedList::new(
            sections(vec![("A", entries("row", 3))]),
            move |items: Vec<Entry>| {
                log.record(&items);
                let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt == 0 {
                        Err(BrowseError::completion("connection lost"))
                    } else {
                        Ok(items.into_iter().map(Entry::complete).collect())
                    }
                }
            },
        )
    };

    let mut updates = list.request(Coordinate::new(0, 1)).expect("valid coordinate");
    let update = next_update(&mut updates).await;

    match update {
        ItemUpdate::Failed { item, error } => {
            assert_eq!(item.id, "row1");
            assert_eq!(error, BrowseError::completion("connection lost"));
        }
        other => panic!("expected a failure update, got {other:?}"),
    }

    for row in 0..3 {
        assert_eq!(
            list.load_status(Coordinate::new(0, row)),
            Some(LoadStatus::Initial)
        );
    }

    let mut retry = list.request(Coordinate::new(0, 1)).expect("valid coordinate");
    assert!(next_update(&mut retry).await.is_complete());
    assert_eq!(log.call_count(), 2);
}

#[tokio::test]
async fn test_duplicate_ids_all_receive_the_completed_value() {
    let log = FetchLog::default();
    let list = completing_list(
        vec![
            ("A", vec![Entry::placeholder("dup")]),
            ("B", vec![Entry::placeholder("dup")]),
        ],
        log.clone(),
    );

    let mut updates = list.request(Coordinate::new(0, 0)).expect("valid coordinate");
    next_update(&mut updates).await;

    assert_eq!(
        list.load_status(Coordinate::new(0, 0)),
        Some(LoadStatus::Complete)
    );
    assert_eq!(
        list.load_status(Coordinate::new(1, 0)),
        Some(LoadStatus::Complete)
    );
}

#[tokio::test]
async fn test_partial_result_leaves_missing_rows_pending() {
    let log = FetchLog::default();
    let list = {
        let log = log.clone();
        SectionedList::new(
            sections(vec![("A", entries("row", 3))]),
            move |items: Vec<Entry>| {
                log.record(&items);
                async move {
                    // Only the first item of the batch comes back.
                    Ok(items.into_iter().take(1).map(Entry::complete).collect())
                }
            },
        )
    };

    let mut requested = list.request(Coordinate::new(0, 0)).expect("valid coordinate");
    let mut missing = list.request(Coordinate::new(0, 2)).expect("valid coordinate");

    assert!(next_update(&mut requested).await.is_complete());

    assert_eq!(
        list.load_status(Coordinate::new(0, 2)),
        Some(LoadStatus::InProgress)
    );
    assert!(
        timeout(Duration::from_millis(50), missing.changed())
            .await
            .is_err(),
        "missing rows must not receive an update"
    );
    assert_eq!(log.call_count(), 1);
}
