//! FormGroup Component
//!
//! Label, helper text and inline error around a single form field.

/// View model of a labelled form field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormGroup {
    pub id: String,
    pub label: Option<String>,
    pub helper: Option<String>,
    pub error_message: Option<String>,
    /// Whether the error is currently displayed
    pub show_error: bool,
    pub is_required: bool,
}

impl FormGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Id of the element carrying the error message
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    /// Error text, only while it is displayed
    pub fn visible_error(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|_| self.show_error)
    }
}
