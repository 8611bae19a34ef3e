//! Loosely-typed field edits coming from form inputs.
//!
//! Form inputs hand over text, checkbox flags or an explicit "clear". Each
//! draft entity decides how a [`FieldValue`] maps onto its typed fields.

use serde::{Deserialize, Deserializer};

use crate::domain::foundation::ValidationError;

/// A single value typed into a form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Cleared,
}

impl FieldValue {
    /// Reads the value as required text; a cleared input becomes empty text.
    pub fn into_text(self, field: &str) -> Result<String, ValidationError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Cleared => Ok(String::new()),
            FieldValue::Flag(_) => Err(ValidationError::invalid_format(
                field,
                "expected text, got a checkbox value",
            )),
        }
    }

    /// Reads the value as optional text. Empty text is kept as typed; blank
    /// values are dropped later when the payload is built.
    pub fn into_optional_text(self, field: &str) -> Result<Option<String>, ValidationError> {
        match self {
            FieldValue::Text(text) => Ok(Some(text)),
            FieldValue::Cleared => Ok(None),
            FieldValue::Flag(_) => Err(ValidationError::invalid_format(
                field,
                "expected text, got a checkbox value",
            )),
        }
    }

    pub fn into_flag(self, field: &str) -> Result<bool, ValidationError> {
        match self {
            FieldValue::Flag(flag) => Ok(flag),
            FieldValue::Cleared => Ok(false),
            FieldValue::Text(_) => Err(ValidationError::invalid_format(
                field,
                "expected a checkbox value, got text",
            )),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Cleared, FieldValue::Text)
    }
}

/// An entity that lives in an ordered sub-collection of the draft.
pub trait DraftItem: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Field selector used by positional updates.
    type Field: Copy + std::fmt::Debug;

    /// A fresh entity with field-level defaults.
    fn blank() -> Self;

    /// Replaces one field, leaving the others untouched.
    fn set_field(&mut self, field: Self::Field, value: FieldValue) -> Result<(), ValidationError>;
}

/// Service records may send `null` for text the draft keeps as a plain string.
pub(crate) fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn nullable_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}
