//! AppEntities - Shared State Handles
//!
//! Everything the screens share is collected here: configuration, the query
//! cache, the current location and the toast queue. Clones share state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::config::AppConfig;
use crate::i18n::Locale;
use crate::services::QueryCache;
use crate::state::location_state::Location;
use crate::state::toast_state::{ToastKind, ToastState};

/// Collection of all shared handles
#[derive(Debug, Clone)]
pub struct AppEntities {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process-wide query cache
    pub cache: QueryCache,
    /// Current address
    pub location: Location,
    /// Visible notifications
    toasts: Arc<Mutex<ToastState>>,
}

impl AppEntities {
    /// Initialize all entities from a configuration, starting at `href`
    pub fn init(config: AppConfig, href: &str) -> Self {
        let toasts = ToastState::new(config.toast_capacity);
        Self {
            config: Arc::new(config),
            cache: QueryCache::new(),
            location: Location::parse(href),
            toasts: Arc::new(Mutex::new(toasts)),
        }
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Lock the toast queue
    pub fn toasts(&self) -> MutexGuard<'_, ToastState> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Push a notification
    pub fn notify(&self, kind: ToastKind, title: impl Into<String>, description: Option<String>) -> u64 {
        self.toasts().notify(kind, title, description)
    }
}

impl Default for AppEntities {
    fn default() -> Self {
        Self::init(AppConfig::default(), "/")
    }
}
