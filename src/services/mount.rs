//! Mount Tokens
//!
//! Remote calls are never cancelled. A screen holds a mount token and checks
//! it before applying a result that settled after the screen went away.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

/// Whether the owning screen is still mounted
#[derive(Debug, Clone)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    /// A token for a freshly mounted screen
    pub fn mounted() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Pass `value` through while mounted, otherwise drop it
    pub fn guard<T>(&self, value: T) -> Result<T> {
        if self.is_mounted() {
            Ok(value)
        } else {
            tracing::warn!("Dropping result that settled after unmount");
            Err(Error::Unmounted)
        }
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::mounted()
    }
}
