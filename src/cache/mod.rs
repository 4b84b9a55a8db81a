//! URL-keyed revalidating cache for remote resources.
//!
//! Single source of truth for what the UI currently believes about remote
//! state. Reads are synchronous snapshots; the first read of a key starts a
//! background fetch. Invalidation schedules a refetch without blocking the
//! caller, and readers keep seeing the last-known value while it runs
//! (stale-while-revalidate). Every settle is announced over a channel so views
//! can re-render.
//!
//! Invariants:
//! - At most one fetch is in flight per key; concurrent reads share it.
//! - An invalidation during an in-flight fetch queues exactly one follow-up
//!   fetch, run after the current one settles.
//! - A fetch that settles after its key was forgotten (or superseded) is
//!   discarded without touching state.

use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use crate::api::ApiError;

pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Value, ApiError>> + Send + 'static>>;

/// Source of remote resource data, keyed by URL.
///
/// Implemented by the HTTP client in production and by scripted fakes in tests.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, key: &str) -> FetchFuture;
}

/// Notification that a key settled (successfully or not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    Updated { key: String },
}

/// Synchronous view of one cache entry.
#[derive(Clone, Default)]
pub struct Snapshot {
    pub data: Option<Arc<Value>>,
    pub is_loading: bool,
    pub error: Option<Arc<ApiError>>,
}

/// Typed projection of a [`Snapshot`] for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    Loading,
    Failed { message: String },
    Ready(T),
}

impl Snapshot {
    /// Decode the cached value into `T`.
    ///
    /// Stale data wins over a newer error so a failed revalidation keeps
    /// rendering the last good value; an entry with neither data nor error is
    /// still loading.
    pub fn view<T: serde::de::DeserializeOwned>(&self) -> ResourceState<T> {
        if let Some(data) = &self.data {
            return match serde_json::from_value(data.as_ref().clone()) {
                Ok(value) => ResourceState::Ready(value),
                Err(err) => ResourceState::Failed {
                    message: format!("Unexpected response from store: {err}"),
                },
            };
        }
        if let Some(error) = &self.error {
            return ResourceState::Failed {
                message: error.user_message(),
            };
        }
        ResourceState::Loading
    }

    /// True when a refetch is running behind an already-populated entry.
    pub fn is_revalidating(&self) -> bool {
        self.is_loading && self.data.is_some()
    }
}

#[derive(Default)]
struct Entry {
    data: Option<Arc<Value>>,
    error: Option<Arc<ApiError>>,
    in_flight: bool,
    revalidate_queued: bool,
    /// Generation of the latest fetch started for this entry, drawn from the
    /// store-wide counter so a forgotten-and-recreated entry can never reuse
    /// a value an orphaned fetch still carries. A settle with a different
    /// generation is discarded.
    generation: u64,
}

impl Entry {
    fn never_fetched(&self) -> bool {
        self.data.is_none() && self.error.is_none() && !self.in_flight
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            data: self.data.clone(),
            is_loading: self.in_flight,
            error: self.error.clone(),
        }
    }
}

/// Key-addressed cache with revalidation, shared across the UI.
#[derive(Clone)]
pub struct CacheStore {
    inner: Arc<Mutex<HashMap<String, Entry>>>,
    fetcher: Arc<dyn Fetcher>,
    notify: UnboundedSender<CacheEvent>,
    generation: Arc<AtomicU64>,
}

impl CacheStore {
    pub fn new(fetcher: Arc<dyn Fetcher>, notify: UnboundedSender<CacheEvent>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            fetcher,
            notify,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot the entry for `key`, starting a fetch on first read.
    pub fn read(&self, key: &str) -> Snapshot {
        let mut map = self.inner.lock();
        let entry = map.entry(key.to_string()).or_default();
        if entry.never_fetched() {
            self.start_fetch(entry, key);
        }
        entry.snapshot()
    }

    /// Mark `key` stale and schedule a background refetch.
    ///
    /// If a fetch is already in flight the refetch is queued behind it; only
    /// one refetch is ever queued regardless of how often this is called.
    pub fn invalidate(&self, key: &str) {
        let mut map = self.inner.lock();
        let entry = map.entry(key.to_string()).or_default();
        if entry.in_flight {
            entry.revalidate_queued = true;
        } else {
            self.start_fetch(entry, key);
        }
    }

    /// Drop the entry for `key`. A fetch that settles afterwards is ignored.
    pub fn forget(&self, key: &str) {
        self.inner.lock().remove(key);
    }

    fn start_fetch(&self, entry: &mut Entry, key: &str) {
        entry.in_flight = true;
        entry.generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let generation = entry.generation;
        let store = self.clone();
        let key = key.to_string();
        tokio::spawn(async move {
            let result = store.fetcher.fetch(&key).await;
            store.settle(&key, generation, result);
        });
    }

    /// Apply a finished fetch. Atomic with respect to readers: value, flags,
    /// and the queued-revalidation decision change under one lock.
    fn settle(&self, key: &str, generation: u64, result: Result<Value, ApiError>) {
        let mut map = self.inner.lock();
        let Some(entry) = map.get_mut(key) else {
            // Key was forgotten while the fetch ran.
            return;
        };
        if entry.generation != generation {
            return;
        }

        match result {
            Ok(value) => {
                entry.data = Some(Arc::new(value));
                entry.error = None;
                tracing::debug!(key, "cache entry refreshed");
            }
            Err(err) => {
                // Keep stale data; readers see it alongside the error.
                tracing::warn!(key, error = %err, "fetch failed");
                entry.error = Some(Arc::new(err));
            }
        }

        if entry.revalidate_queued {
            entry.revalidate_queued = false;
            self.start_fetch(entry, key);
        } else {
            entry.in_flight = false;
        }

        drop(map);
        let _ = self.notify.send(CacheEvent::Updated {
            key: key.to_string(),
        });
    }
}
