//! Response bodies of the profile service.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::foundation::{ItemId, ProfileId};

/// Body of a successful signup or root creation (the created user).
#[derive(Debug, Deserialize)]
pub struct CreatedProfile {
    pub id: ProfileId,
}

/// Body of a successful sub-item creation.
#[derive(Debug, Deserialize)]
pub struct CreatedItem {
    pub id: ItemId,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body. `detail` is a string for domain errors and a list of
/// `{loc, msg, type}` objects for request validation errors.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable message carried by the body, if any.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }
}
