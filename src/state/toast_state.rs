//! ToastState - Transient Notifications With Ring Buffer

use std::collections::VecDeque;

/// Toast kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn label(&self) -> &'static str {
        match self {
            ToastKind::Success => "SUCCESS",
            ToastKind::Error => "ERROR",
            ToastKind::Warning => "WARNING",
            ToastKind::Info => "INFO",
        }
    }
}

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Visible toasts, oldest dropped first when full
#[derive(Debug)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
    capacity: usize,
    next_id: u64,
}

impl ToastState {
    /// Create a new toast state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a toast, returning its id
    pub fn notify(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let toast = Toast {
            id: self.next_id,
            kind,
            title: title.into(),
            description,
        };
        self.next_id += 1;

        match kind {
            ToastKind::Error => tracing::warn!(title = %toast.title, description = ?toast.description, "Toast"),
            _ => tracing::info!(kind = kind.label(), title = %toast.title, "Toast"),
        }

        let id = toast.id;
        if self.capacity == 0 {
            return id;
        }
        if self.toasts.len() >= self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
        id
    }

    pub fn success(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.notify(ToastKind::Success, title, description)
    }

    pub fn error(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.notify(ToastKind::Error, title, description)
    }

    pub fn warning(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.notify(ToastKind::Warning, title, description)
    }

    pub fn info(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.notify(ToastKind::Info, title, description)
    }

    /// Dismiss a toast by id
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Visible toasts, oldest first
    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    /// Most recent toast
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_TOAST_CAPACITY)
    }
}
