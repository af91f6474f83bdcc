use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::list::{Filters, ListState, Pagination};
use crate::models::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was applied to the state.
    Applied,
    /// The request failed; the error message is in the state.
    Failed,
    /// A newer load was issued meanwhile, so this response was dropped.
    Stale,
    /// The filter already had that value; nothing was requested.
    Unchanged,
}

/// List controller for one endpoint.
///
/// Clones share state, so a clone can be handed to a debounced search task.
pub struct ListController<T> {
    api: ApiClient,
    endpoint: Arc<str>,
    filters: Arc<Mutex<Filters>>,
    state: Arc<Mutex<ListState<T>>>,
    latest_ticket: Arc<AtomicU64>,
    settled_ticket: Arc<AtomicU64>,
}

/// Marks a load as settled when it finishes or its future is dropped.
///
/// Only the latest ticket settles, so a cancelled stale load never clears
/// the loading flag of a newer one.
struct LoadGuard<'a> {
    latest: &'a AtomicU64,
    settled: &'a AtomicU64,
    ticket: u64,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if self.latest.load(Ordering::SeqCst) == self.ticket {
            self.settled.fetch_max(self.ticket, Ordering::SeqCst);
        }
    }
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            endpoint: self.endpoint.clone(),
            filters: self.filters.clone(),
            state: self.state.clone(),
            latest_ticket: self.latest_ticket.clone(),
            settled_ticket: self.settled_ticket.clone(),
        }
    }
}

impl<T> ListController<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub fn new(api: ApiClient, endpoint: &str, page_size: u32) -> Self {
        Self {
            api,
            endpoint: Arc::from(endpoint),
            filters: Arc::new(Mutex::new(Filters::new())),
            state: Arc::new(Mutex::new(ListState::new(page_size))),
            latest_ticket: Arc::new(AtomicU64::new(0)),
            settled_ticket: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Starts with `filters` already applied, e.g. a fixed `role=STUDENT`.
    pub fn with_filters(api: ApiClient, endpoint: &str, page_size: u32, filters: Filters) -> Self {
        let controller = Self::new(api, endpoint, page_size);
        Self {
            filters: Arc::new(Mutex::new(filters)),
            ..controller
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches `page` (clamped to 0) with the current filters.
    pub async fn load(&self, page: i64) -> LoadOutcome {
        let page = u32::try_from(page.max(0)).unwrap_or(u32::MAX);
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = LoadGuard {
            latest: &self.latest_ticket,
            settled: &self.settled_ticket,
            ticket,
        };

        let size = self.state.lock().await.size;
        let query = self.filters.lock().await.to_query(page, size);

        debug!("GET {} page={} (ticket {})", self.endpoint, page, ticket);
        let result = self.api.get_page::<T>(&self.endpoint, &query).await;

        let mut state = self.state.lock().await;
        if self.latest_ticket.load(Ordering::SeqCst) != ticket {
            debug!("Dropping stale response for {} (ticket {})", self.endpoint, ticket);
            return LoadOutcome::Stale;
        }

        match result {
            Ok(page) => {
                state.apply_page(page);
                LoadOutcome::Applied
            }
            Err(e) => {
                warn!("Failed to load {}: {}", self.endpoint, e);
                state.apply_error(e.user_message());
                LoadOutcome::Failed
            }
        }
    }

    fn in_flight(&self) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) > self.settled_ticket.load(Ordering::SeqCst)
    }

    /// Locks the state with `loading` brought up to date.
    async fn current(&self) -> MutexGuard<'_, ListState<T>> {
        let mut state = self.state.lock().await;
        state.loading = self.in_flight();
        state
    }

    pub async fn reload(&self) -> LoadOutcome {
        let page = self.state.lock().await.page;
        self.load(i64::from(page)).await
    }

    /// Reloads after a row went away, stepping back one page when the
    /// current page came back empty.
    pub async fn reload_after_removal(&self) -> LoadOutcome {
        let outcome = self.reload().await;
        if outcome != LoadOutcome::Applied {
            return outcome;
        }
        let (emptied, page) = {
            let state = self.state.lock().await;
            (state.items.is_empty(), state.page)
        };
        if emptied && page > 0 {
            return self.load(i64::from(page) - 1).await;
        }
        outcome
    }

    /// Updates one filter and, when it actually changed, reloads from page 0.
    pub async fn set_filter(&self, key: &str, value: &str) -> LoadOutcome {
        let changed = self.filters.lock().await.set(key, value);
        if !changed {
            return LoadOutcome::Unchanged;
        }
        self.load(0).await
    }

    pub async fn clear_filter(&self, key: &str) -> LoadOutcome {
        let changed = self.filters.lock().await.clear(key);
        if !changed {
            return LoadOutcome::Unchanged;
        }
        self.load(0).await
    }

    pub async fn filter(&self, key: &str) -> Option<String> {
        self.filters.lock().await.get(key).map(str::to_string)
    }

    pub async fn pagination(&self) -> Pagination {
        self.current().await.pagination()
    }

    /// `None` when already on the first page or while loading.
    pub async fn prev_page(&self) -> Option<LoadOutcome> {
        let target = self.pagination().await.prev()?;
        Some(self.load(i64::from(target)).await)
    }

    /// `None` when already on the last page or while loading.
    pub async fn next_page(&self) -> Option<LoadOutcome> {
        let target = self.pagination().await.next()?;
        Some(self.load(i64::from(target)).await)
    }

    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.in_flight()
    }
}

impl<T> ListController<T>
where
    T: DeserializeOwned + Clone + Send + 'static,
{
    pub async fn snapshot(&self) -> ListState<T> {
        self.current().await.clone()
    }

    pub async fn items(&self) -> Vec<T> {
        self.state.lock().await.items.clone()
    }
}

impl<T> ListController<T>
where
    T: DeserializeOwned + Identified + Clone + Send + 'static,
{
    pub async fn find(&self, id: i64) -> Option<T> {
        self.state
            .lock()
            .await
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Replaces the item with the same id. Returns false if it is not on
    /// the current page.
    pub async fn patch_item(&self, updated: T) -> bool {
        let mut state = self.state.lock().await;
        match state.items.iter_mut().find(|item| item.id() == updated.id()) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    pub async fn remove_item(&self, id: i64) -> bool {
        let mut state = self.state.lock().await;
        let before = state.items.len();
        state.items.retain(|item| item.id() != id);
        let removed = state.items.len() != before;
        if removed {
            state.total_elements = state.total_elements.saturating_sub(1);
        }
        removed
    }
}
