//! Query Cache
//!
//! Process-wide cache of remote reads keyed by a typed [`QueryKey`].
//! Entries stay fresh until a mutation explicitly invalidates them.

use std::any::Any;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ahash::AHashMap;

use crate::error::Result;

/// Kind of query, the unit of invalidation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Account,
    Users,
    User,
}

/// Identity of a cached query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The signed-in account
    Account,
    /// A page of users; `page` is the 0-based index sent to the server
    Users { page: u32, size: u32 },
    /// A single user by login
    User { login: String },
}

impl QueryKey {
    pub fn kind(&self) -> QueryKind {
        match self {
            QueryKey::Account => QueryKind::Account,
            QueryKey::Users { .. } => QueryKind::Users,
            QueryKey::User { .. } => QueryKind::User,
        }
    }
}

type CachedValue = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
struct CacheEntry {
    value: Option<CachedValue>,
    stale: bool,
    is_loading: bool,
}

/// Snapshot of a query for rendering
#[derive(Debug)]
pub struct QueryState<T> {
    pub data: Option<Arc<T>>,
    pub is_loading: bool,
    pub is_stale: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_stale: false,
        }
    }
}

/// Shared query cache handle
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<AHashMap<QueryKey, CacheEntry>>>,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.lock().len())
            .finish()
    }
}

fn downcast<T: Send + Sync + 'static>(key: &QueryKey, value: &CachedValue) -> Option<Arc<T>> {
    match Arc::clone(value).downcast::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(?key, "Cached value has an unexpected type");
            None
        }
    }
}

/// Clears an entry's loading flag when its fetch settles or is dropped
struct Loading<'a> {
    cache: &'a QueryCache,
    key: &'a QueryKey,
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        if let Some(entry) = self.cache.lock().get_mut(self.key) {
            entry.is_loading = false;
        }
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, AHashMap<QueryKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return fresh cached data for `key`, or run `fetcher` and cache its result.
    ///
    /// A failed fetch keeps whatever data was cached before.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        {
            let mut entries = self.lock();
            let entry = entries.entry(key.clone()).or_default();
            if !entry.stale {
                if let Some(value) = entry.value.as_ref().and_then(|v| downcast::<T>(&key, v)) {
                    tracing::trace!(?key, "Query cache hit");
                    return Ok(value);
                }
            }
            entry.is_loading = true;
        }

        tracing::debug!(?key, "Fetching query");
        let loading = Loading {
            cache: self,
            key: &key,
        };
        let result = fetcher().await;
        drop(loading);

        let mut entries = self.lock();
        let entry = entries.entry(key.clone()).or_default();
        match result {
            Ok(value) => {
                let value = Arc::new(value);
                entry.value = Some(value.clone());
                entry.stale = false;
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(?key, error = %e, "Query fetch failed");
                Err(e)
            }
        }
    }

    /// Current state of a query
    pub fn state<T: Send + Sync + 'static>(&self, key: &QueryKey) -> QueryState<T> {
        let entries = self.lock();
        match entries.get(key) {
            Some(entry) => QueryState {
                data: entry.value.as_ref().and_then(|v| downcast::<T>(key, v)),
                is_loading: entry.is_loading,
                is_stale: entry.stale,
            },
            None => QueryState::default(),
        }
    }

    /// Store data directly, as a fresh entry
    pub fn set_data<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        let mut entries = self.lock();
        let entry = entries.entry(key).or_default();
        entry.value = Some(Arc::new(value));
        entry.stale = false;
    }

    /// Mark every entry of `kind` stale, returning how many were marked
    pub fn invalidate(&self, kind: QueryKind) -> usize {
        let mut entries = self.lock();
        let mut count = 0;
        for (_, entry) in entries.iter_mut().filter(|(key, _)| key.kind() == kind) {
            entry.stale = true;
            count += 1;
        }
        tracing::debug!(?kind, count, "Invalidated queries");
        count
    }

    /// Mark a single entry stale
    pub fn invalidate_key(&self, key: &QueryKey) -> bool {
        match self.lock().get_mut(key) {
            Some(entry) => {
                entry.stale = true;
                true
            }
            None => false,
        }
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.lock().clear();
    }
}
