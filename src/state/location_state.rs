//! LocationState - Navigable Address With Query Parameters

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hashlink::LinkedHashMap;
use url::form_urlencoded;

#[derive(Debug, Default)]
struct LocationInner {
    path: String,
    query: LinkedHashMap<String, String>,
}

/// Shared handle on the current address (`/path?key=value&...`)
///
/// Clones share the same address, so every screen observes writes made by
/// any other.
#[derive(Debug, Clone, Default)]
pub struct Location {
    inner: Arc<Mutex<LocationInner>>,
}

impl Location {
    /// Parse an address such as `/admin/users/?page=2`
    pub fn parse(href: &str) -> Self {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let query = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect::<LinkedHashMap<_, _>>();
        Self {
            inner: Arc::new(Mutex::new(LocationInner {
                path: path.to_string(),
                query,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LocationInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current path without the query
    pub fn path(&self) -> String {
        self.lock().path.clone()
    }

    /// Navigate to a new address, replacing path and query
    pub fn navigate(&self, href: &str) {
        let next = Self::parse(href);
        let next = std::mem::take(&mut *next.lock());
        tracing::debug!(path = %next.path, "Navigating");
        *self.lock() = next;
    }

    /// Read a query parameter
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().query.get(key).cloned()
    }

    /// Write a query parameter, keeping its position if already present
    pub fn set(&self, key: &str, value: impl Into<String>) {
        let mut inner = self.lock();
        let value = value.into();
        match inner.query.get_mut(key) {
            Some(existing) => *existing = value,
            None => {
                inner.query.insert(key.to_string(), value);
            }
        }
    }

    /// Remove a query parameter
    pub fn remove(&self, key: &str) -> Option<String> {
        self.lock().query.remove(key)
    }

    /// Encoded query string without the leading `?`
    pub fn query_string(&self) -> String {
        let inner = self.lock();
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in inner.query.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Full address
    pub fn href(&self) -> String {
        let query = self.query_string();
        let path = self.path();
        if query.is_empty() {
            path
        } else {
            format!("{path}?{query}")
        }
    }
}
