//! Validation Rules
//!
//! Predicates paired with the message shown when they fail.

use std::fmt;
use std::sync::Arc;

/// A predicate over a field value plus its failure message
#[derive(Clone)]
pub struct Validation {
    rule: Arc<dyn Fn(&str) -> bool + Send + Sync>,
    pub message: String,
}

impl Validation {
    pub fn new(rule: impl Fn(&str) -> bool + Send + Sync + 'static, message: impl Into<String>) -> Self {
        Self {
            rule: Arc::new(rule),
            message: message.into(),
        }
    }

    /// Whether `value` passes. Empty values pass: emptiness is the
    /// `required` check's job.
    pub fn check(&self, value: &str) -> bool {
        value.is_empty() || (self.rule)(value)
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation").field("message", &self.message).finish()
    }
}

/// Loose email shape check: one `@`, a non-empty local part and a dotted
/// domain without empty labels or whitespace
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// At least `min` characters
pub fn min_length(min: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |value| value.chars().count() >= min
}

/// At most `max` characters
pub fn max_length(max: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |value| value.chars().count() <= max
}
