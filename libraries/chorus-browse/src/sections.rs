//! Windowed lazy-completion section lists
//!
//! A `SectionedList` holds lightweight placeholder items grouped into titled
//! sections and completes them with full data on demand. Requesting one
//! coordinate gathers a bounded window of uncompleted neighbours into a
//! single batch and hands the batch to an injected completion function, so
//! scrolling a long list costs neither one fetch per row nor an eager fetch
//! of the whole list.
//!
//! Every cell carries a `tokio::sync::watch` channel holding the latest
//! known value, so subscribers immediately see the placeholder and are
//! notified once the completed item arrives.

use crate::error::BrowseError;
use crate::item::SectionItem;
use crate::window::{predecessor, successor, Coordinate, WINDOW_RADIUS};
use futures_util::future::BoxFuture;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{debug, warn};

/// How far data completion for a cell has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Only initial key information (like an id or an artist/album
    /// combination) is present
    Initial,
    /// A request to complete all data is in progress
    InProgress,
    /// All data is available
    Complete,
}

/// Value published on a cell's channel.
#[derive(Debug, Clone)]
pub enum ItemUpdate<T> {
    /// The placeholder item; full data has not arrived yet
    Partial(T),
    /// The item with all data available
    Complete(T),
    /// The batch containing this item failed; the cell has been reset and a
    /// later request will fetch it again
    Failed {
        /// The still-partial item
        item: T,
        /// Why the batch failed
        error: BrowseError,
    },
}

impl<T> ItemUpdate<T> {
    /// The item carried by this update, however complete it is.
    pub fn item(&self) -> &T {
        match self {
            ItemUpdate::Partial(item) | ItemUpdate::Complete(item) => item,
            ItemUpdate::Failed { item, .. } => item,
        }
    }

    /// Whether this update carries fully completed data.
    pub fn is_complete(&self) -> bool {
        matches!(self, ItemUpdate::Complete(_))
    }
}

/// The future a completion function returns: the batch items with full data.
pub type CompletionFuture<T> = BoxFuture<'static, Result<Vec<T>, BrowseError>>;

/// The injected async collaborator that turns placeholder items into fully
/// populated items. It receives one batch at a time and may be invoked
/// concurrently for independent batches.
pub type CompletionFn<T> = Arc<dyn Fn(Vec<T>) -> CompletionFuture<T> + Send + Sync>;

struct Cell<T> {
    status: LoadStatus,
    sender: watch::Sender<ItemUpdate<T>>,
}

impl<T: SectionItem> Cell<T> {
    fn new(item: T) -> Self {
        let (sender, _) = watch::channel(ItemUpdate::Partial(item));
        Self {
            status: LoadStatus::Initial,
            sender,
        }
    }

    fn item(&self) -> T {
        self.sender.borrow().item().clone()
    }
}

struct Section<T> {
    title: String,
    cells: Vec<Cell<T>>,
}

struct Store<T> {
    sections: Vec<Section<T>>,
}

impl<T: SectionItem> Store<T> {
    fn cell(&self, coordinate: Coordinate) -> Option<&Cell<T>> {
        self.sections
            .get(coordinate.section)?
            .cells
            .get(coordinate.row)
    }

    fn cell_mut(&mut self, coordinate: Coordinate) -> Option<&mut Cell<T>> {
        self.sections
            .get_mut(coordinate.section)?
            .cells
            .get_mut(coordinate.row)
    }

    fn shape(&self) -> Vec<usize> {
        self.sections
            .iter()
            .map(|section| section.cells.len())
            .collect()
    }

    /// Claim the cell at `coordinate` for the batch under construction: only
    /// cells still `Initial` join; anything already in progress or complete
    /// is left alone so it is never fetched twice.
    fn claim(
        &mut self,
        coordinate: Coordinate,
        batch: &mut Vec<T>,
        coordinates_by_id: &mut HashMap<String, Vec<Coordinate>>,
    ) {
        if let Some(cell) = self.cell_mut(coordinate) {
            if cell.status == LoadStatus::Initial {
                cell.status = LoadStatus::InProgress;
                let item = cell.item();
                coordinates_by_id
                    .entry(item.id().to_string())
                    .or_default()
                    .push(coordinate);
                batch.push(item);
            }
        }
    }

    /// Walk up to `WINDOW_RADIUS` rows before and after `origin`, claiming
    /// every uncompleted cell along the way. Returns the batch to fetch and
    /// the id -> coordinates map used to route results back.
    fn collect_window(
        &mut self,
        origin: Coordinate,
    ) -> (Vec<T>, HashMap<String, Vec<Coordinate>>) {
        let shape = self.shape();
        let mut batch = Vec::new();
        let mut coordinates_by_id = HashMap::new();

        self.claim(origin, &mut batch, &mut coordinates_by_id);

        let mut down = Some(origin);
        for _ in 0..WINDOW_RADIUS {
            down = match down.and_then(|coordinate| predecessor(&shape, coordinate)) {
                Some(coordinate) => {
                    self.claim(coordinate, &mut batch, &mut coordinates_by_id);
                    Some(coordinate)
                }
                None => break,
            };
        }

        let mut up = Some(origin);
        for _ in 0..WINDOW_RADIUS {
            up = match up.and_then(|coordinate| successor(&shape, coordinate)) {
                Some(coordinate) => {
                    self.claim(coordinate, &mut batch, &mut coordinates_by_id);
                    Some(coordinate)
                }
                None => break,
            };
        }

        (batch, coordinates_by_id)
    }
}

struct Shared<T> {
    store: Mutex<Store<T>>,
    complete: CompletionFn<T>,
}

impl<T: SectionItem> Shared<T> {
    /// Write completed items back into their cells and notify subscribers.
    /// Items whose id was not part of the batch are dropped. Batch items
    /// missing from the result keep their in-progress status.
    fn apply_batch(
        &self,
        coordinates_by_id: &HashMap<String, Vec<Coordinate>>,
        items: Vec<T>,
    ) {
        let mut store = self.store.lock().unwrap();
        for item in items {
            let Some(coordinates) = coordinates_by_id.get(item.id()) else {
                debug!(id = item.id(), "completed item does not belong to this batch, dropping");
                continue;
            };
            for &coordinate in coordinates {
                if let Some(cell) = store.cell_mut(coordinate) {
                    cell.status = LoadStatus::Complete;
                    cell.sender.send_replace(ItemUpdate::Complete(item.clone()));
                }
            }
        }
    }

    /// Reset every still-pending cell of a failed batch and broadcast the
    /// error, so waiting subscribers are unblocked and a later request
    /// retries the fetch.
    fn fail_batch(
        &self,
        coordinates_by_id: &HashMap<String, Vec<Coordinate>>,
        error: &BrowseError,
    ) {
        warn!(%error, "completion batch failed, resetting affected cells");
        let mut store = self.store.lock().unwrap();
        for &coordinate in coordinates_by_id.values().flatten() {
            if let Some(cell) = store.cell_mut(coordinate) {
                if cell.status == LoadStatus::InProgress {
                    cell.status = LoadStatus::Initial;
                    let item = cell.item();
                    cell.sender.send_replace(ItemUpdate::Failed {
                        item,
                        error: error.clone(),
                    });
                }
            }
        }
    }
}

/// An ordered, sectioned list of items that are completed lazily in batches.
///
/// The list is constructed once from placeholder items and never changes
/// shape; cells mutate in place as batches resolve. Handles are cheap to
/// clone and share the same backing store. All store access is serialized
/// through one mutex, held only for short synchronous sections.
pub struct SectionedList<T: SectionItem> {
    shared: Arc<Shared<T>>,
}

impl<T: SectionItem> Clone for SectionedList<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: SectionItem> SectionedList<T> {
    /// Create a list from titled sections and a completion function.
    ///
    /// All cells start out `Initial`, holding the placeholder items passed
    /// in. Section order and row order are preserved as given.
    pub fn new<F, Fut>(sections: Vec<(String, Vec<T>)>, complete: F) -> Self
    where
        F: Fn(Vec<T>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>, BrowseError>> + Send + 'static,
    {
        Self::with_completion_fn(
            sections,
            Arc::new(move |items| -> CompletionFuture<T> { Box::pin(complete(items)) }),
        )
    }

    /// Create a list from titled sections and an already shared completion
    /// function.
    pub fn with_completion_fn(sections: Vec<(String, Vec<T>)>, complete: CompletionFn<T>) -> Self {
        let sections = sections
            .into_iter()
            .map(|(title, items)| Section {
                title,
                cells: items.into_iter().map(Cell::new).collect(),
            })
            .collect();

        Self {
            shared: Arc::new(Shared {
                store: Mutex::new(Store { sections }),
                complete,
            }),
        }
    }

    /// The number of sections in the list.
    pub fn section_count(&self) -> usize {
        self.lock_store().sections.len()
    }

    /// The number of rows in a section, 0 when the section does not exist.
    pub fn row_count(&self, section: usize) -> usize {
        self.lock_store()
            .sections
            .get(section)
            .map_or(0, |section| section.cells.len())
    }

    /// The titles of all sections, in order.
    pub fn section_titles(&self) -> Vec<String> {
        self.lock_store()
            .sections
            .iter()
            .map(|section| section.title.clone())
            .collect()
    }

    /// The currently cached value at a coordinate, partial or complete.
    /// `None` when the coordinate is outside the list. Never fetches.
    pub fn value_at(&self, coordinate: Coordinate) -> Option<T> {
        self.lock_store().cell(coordinate).map(Cell::item)
    }

    /// The load status of the cell at a coordinate, `None` when the
    /// coordinate is outside the list.
    pub fn load_status(&self, coordinate: Coordinate) -> Option<LoadStatus> {
        self.lock_store().cell(coordinate).map(|cell| cell.status)
    }

    /// Subscribe to the item at a coordinate, fetching it if needed.
    ///
    /// Returns `None` for a coordinate outside the list. The returned
    /// receiver always carries the current value; awaiting `changed()`
    /// yields the completed item once its batch resolves.
    ///
    /// The first request for an uncompleted cell gathers up to
    /// [`WINDOW_RADIUS`] uncompleted rows on each side into one batch and
    /// invokes the completion function once for all of them. Cells already
    /// in progress or complete are joined rather than re-fetched, so rapid
    /// repeated requests and requests for neighbouring rows cost no extra
    /// completion calls.
    ///
    /// Must be called from within a tokio runtime: the completion future
    /// runs as a spawned task. Dropping the receiver only detaches the
    /// listener; the fetch still completes and warms the cache.
    pub fn request(&self, coordinate: Coordinate) -> Option<watch::Receiver<ItemUpdate<T>>> {
        let mut store = self.lock_store();
        let cell = store.cell(coordinate)?;

        if cell.status != LoadStatus::Initial {
            // Cache hit or in-flight join.
            return Some(cell.sender.subscribe());
        }

        let (batch, coordinates_by_id) = store.collect_window(coordinate);
        let receiver = store.cell(coordinate).map(|cell| cell.sender.subscribe());
        drop(store);

        debug!(
            section = coordinate.section,
            row = coordinate.row,
            items = batch.len(),
            "dispatching completion batch"
        );

        let future = (self.shared.complete)(batch);
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            match future.await {
                Ok(items) => shared.apply_batch(&coordinates_by_id, items),
                Err(error) => shared.fail_batch(&coordinates_by_id, &error),
            }
        });

        receiver
    }

    /// Derive a new single-section list holding the items whose current
    /// value matches the filter text.
    ///
    /// The scan runs over whatever is cached right now, placeholders
    /// included, and triggers no fetch. The derived list shares the
    /// completion function but starts out fully uncompleted; the source list
    /// is left untouched.
    pub fn filter(&self, filter: &str) -> SectionedList<T> {
        let matching: Vec<T> = {
            let store = self.lock_store();
            store
                .sections
                .iter()
                .flat_map(|section| section.cells.iter())
                .map(Cell::item)
                .filter(|item| item.matches(filter))
                .collect()
        };

        SectionedList::with_completion_fn(
            vec![(String::new(), matching)],
            Arc::clone(&self.shared.complete),
        )
    }

    fn lock_store(&self) -> MutexGuard<'_, Store<T>> {
        self.shared.store.lock().unwrap()
    }
}
