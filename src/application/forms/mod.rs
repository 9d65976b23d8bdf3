//! Form rules applied before anything reaches the store.
//!
//! Validation is synchronous and all-or-nothing: either a payload comes
//! out, or a list of per-field messages does and the gateway is never
//! called.

pub mod create;
pub mod edit;

use std::fmt;

use url::Url;

pub use create::CreateFormInput;
pub use edit::EditFormInput;

/// Raw numeric input as typed into a form field.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    #[default]
    Absent,
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Coerce to a number. Blank text counts as absent.
    pub(crate) fn coerce(&self, field: &'static str) -> Result<Option<f64>, FieldError> {
        match self {
            Self::Absent => Ok(None),
            Self::Number(value) => finite(Some(*value), field),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                finite(trimmed.parse::<f64>().ok(), field)
            }
        }
    }
}

fn finite(value: Option<f64>, field: &'static str) -> Result<Option<f64>, FieldError> {
    value
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or_else(|| FieldError::new(field, "Expected a number"))
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Absent, Self::Number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failed field, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message surfaced to the user.
    pub fn first_message(&self) -> String {
        self.errors
            .first()
            .map_or_else(|| "Please check the form for errors".to_string(), ToString::to_string)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.first_message())
    }
}

impl std::error::Error for ValidationErrors {}

/// Collects field errors while a form is checked.
#[derive(Debug, Default)]
pub(crate) struct ErrorCollector {
    errors: Vec<FieldError>,
}

impl ErrorCollector {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub(crate) fn add(&mut self, field: &'static str, message: &str) {
        self.push(FieldError::new(field, message));
    }

    pub(crate) fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

pub(crate) fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}
