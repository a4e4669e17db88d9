//! Mutations
//!
//! Remote write operations with a shared loading flag. At most one call per
//! mutation is in flight; a second call while loading is rejected.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

/// Shared loading flag, readable by menus and buttons
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Set the flag unless it is already set
    pub(crate) fn try_start(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub(crate) fn finish(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Clears the loading flag when the call settles or its future is dropped
struct InFlight<'a>(&'a LoadingFlag);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.finish();
    }
}

/// A named remote write operation
#[derive(Debug, Clone)]
pub struct Mutation {
    name: &'static str,
    loading: LoadingFlag,
}

impl Mutation {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            loading: LoadingFlag::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Handle on the loading flag
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Run `call`, or fail with [`Error::MutationInFlight`] if a previous call
    /// has not settled yet. Failures are returned as-is; nothing is retried.
    pub async fn mutate<T, Fut>(&self, call: Fut) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        if !self.loading.try_start() {
            tracing::debug!(mutation = self.name, "Rejecting call while in flight");
            return Err(Error::MutationInFlight {
                name: self.name.to_string(),
            });
        }
        let _in_flight = InFlight(&self.loading);
        call.await
    }
}
