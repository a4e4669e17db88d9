//! Form Engine
//!
//! Field declarations (inputs, selects and checkboxes), value state and
//! validation. Submitting runs every check first; an invalid form never
//! reaches its submit handler.

pub mod validations;

use hashlink::LinkedHashMap;

use crate::components::primitives::form_group::FormGroup;
pub use validations::{Validation, is_email, max_length, min_length};

/// Field values keyed by field name, in declaration order
pub type FormValues = LinkedHashMap<String, String>;

/// A choice of a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Kind of input control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Select {
        options: Vec<SelectOption>,
        invalid_message: String,
    },
    /// A single box; the value is `"true"` when checked
    Checkbox,
    /// Several boxes; the value lists the checked option values, comma separated
    CheckboxGroup {
        options: Vec<SelectOption>,
        invalid_message: String,
    },
}

/// Value of a checked single checkbox
pub const CHECKED: &str = "true";

fn has_option(options: &[SelectOption], value: &str) -> bool {
    options.iter().any(|option| option.value == value)
}

/// Values of a checkbox group
fn split_checked(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|v| !v.is_empty())
}

/// Declaration of a form field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    /// Message shown when the field is left empty; `None` means optional
    pub required: Option<String>,
    pub validations: Vec<Validation>,
    pub helper: Option<String>,
}

impl FieldSpec {
    /// A text input
    pub fn input(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Input,
            required: None,
            validations: Vec::new(),
            helper: None,
        }
    }

    /// A select restricted to `options`
    pub fn select(name: impl Into<String>, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            kind: FieldKind::Select {
                options,
                invalid_message: "Invalid option".to_string(),
            },
            ..Self::input(name, label)
        }
    }

    /// A single checkbox. Required means it must be checked.
    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Checkbox,
            ..Self::input(name, label)
        }
    }

    /// A group of checkboxes restricted to `options`
    pub fn checkbox_group(name: impl Into<String>, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            kind: FieldKind::CheckboxGroup {
                options,
                invalid_message: "Invalid option".to_string(),
            },
            ..Self::input(name, label)
        }
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.validations.push(validation);
        self
    }

    pub fn helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    /// Message used when a select value is not one of its options
    pub fn invalid_option_message(mut self, message: impl Into<String>) -> Self {
        if let FieldKind::Select { invalid_message, .. } | FieldKind::CheckboxGroup { invalid_message, .. } =
            &mut self.kind
        {
            *invalid_message = message.into();
        }
        self
    }

    /// First failing check for `value`
    fn check(&self, value: &str) -> Option<String> {
        let empty = match &self.kind {
            FieldKind::Checkbox => value != CHECKED,
            FieldKind::CheckboxGroup { .. } => split_checked(value).next().is_none(),
            FieldKind::Input | FieldKind::Select { .. } => value.trim().is_empty(),
        };
        if empty {
            return self.required.clone();
        }
        match &self.kind {
            FieldKind::Select {
                options,
                invalid_message,
            } if !has_option(options, value) => return Some(invalid_message.clone()),
            FieldKind::CheckboxGroup {
                options,
                invalid_message,
            } if !split_checked(value).all(|v| has_option(options, v)) => return Some(invalid_message.clone()),
            _ => {}
        }
        self.validations
            .iter()
            .find(|validation| !validation.check(value))
            .map(|validation| validation.message.clone())
    }
}

/// A failed field check, shown inline next to the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Form state: declared fields, current values and submission status
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: LinkedHashMap<String, FieldSpec>,
    values: FormValues,
    touched: ahash::AHashSet<String>,
    submitted: bool,
}

impl Form {
    pub fn new(fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        let fields: LinkedHashMap<_, _> = fields
            .into_iter()
            .map(|field| (field.name.clone(), field))
            .collect();
        let values = fields.keys().map(|name| (name.clone(), String::new())).collect();
        Self {
            fields,
            values,
            touched: ahash::AHashSet::new(),
            submitted: false,
        }
    }

    /// Seed values; names without a declared field are ignored
    pub fn with_initial_values<K, V>(mut self, initial: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in initial {
            if let Some(slot) = self.values.get_mut(name.as_ref()) {
                *slot = value.into();
            }
        }
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Update a field value; unknown names are ignored
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value.into(),
            None => tracing::debug!(field = name, "Ignoring value for undeclared field"),
        }
    }

    /// Mark a field as visited so its error is displayed
    pub fn touch(&mut self, name: &str) {
        if self.fields.contains_key(name) {
            self.touched.insert(name.to_string());
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Check a single field
    pub fn validate_field(&self, name: &str) -> Option<FieldError> {
        let field = self.fields.get(name)?;
        let value = self.value(name).unwrap_or_default();
        field.check(value).map(|message| FieldError {
            field: name.to_string(),
            message,
        })
    }

    /// Check every field, in declaration order
    pub fn validate(&self) -> Vec<FieldError> {
        self.fields
            .keys()
            .filter_map(|name| self.validate_field(name))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Attempt a submit: the valid values, or every field error
    pub fn submit(&mut self) -> Result<FormValues, Vec<FieldError>> {
        self.submitted = true;
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self.values.clone())
        } else {
            tracing::debug!(errors = errors.len(), "Submit blocked by validation");
            Err(errors)
        }
    }

    /// View model for a field's form group
    pub fn field_group(&self, name: &str) -> Option<FormGroup> {
        let field = self.fields.get(name)?;
        let error = self.validate_field(name);
        Some(FormGroup {
            id: field.name.clone(),
            label: Some(field.label.clone()),
            helper: field.helper.clone(),
            show_error: error.is_some() && (self.submitted || self.touched.contains(name)),
            error_message: error.map(|e| e.message),
            is_required: field.required.is_some(),
        })
    }

    /// Options of a select or checkbox group field
    pub fn options(&self, name: &str) -> Option<&[SelectOption]> {
        match &self.fields.get(name)?.kind {
            FieldKind::Select { options, .. } | FieldKind::CheckboxGroup { options, .. } => Some(options),
            FieldKind::Input | FieldKind::Checkbox => None,
        }
    }

    /// Whether a single checkbox is checked
    pub fn is_checked(&self, name: &str) -> bool {
        self.value(name) == Some(CHECKED)
    }

    /// Check or uncheck a single checkbox
    pub fn set_checked(&mut self, name: &str, checked: bool) {
        self.set_value(name, if checked { CHECKED } else { "" });
    }

    /// Checked values of a checkbox group, in the order they were checked
    pub fn checked_values(&self, name: &str) -> Vec<&str> {
        self.value(name).map(|v| split_checked(v).collect()).unwrap_or_default()
    }

    /// Flip one option of a checkbox group
    pub fn toggle_option(&mut self, name: &str, option: &str) {
        let mut checked: Vec<String> = self.checked_values(name).into_iter().map(str::to_string).collect();
        match checked.iter().position(|v| v == option) {
            Some(index) => {
                checked.remove(index);
            }
            None => checked.push(option.to_string()),
        }
        self.set_value(name, checked.join(","));
    }
}
