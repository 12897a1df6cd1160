use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const MAX_EVENT_NAME_LEN: usize = 64;

/// A study event (e.g. a follow-up visit) that interviews belong to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub study_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order_position: Option<i32>,
}

/// Body of `POST /study/{study_id}/event`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventCreate {
    pub name: String,
}

impl EventCreate {
    /// Build an event body, trimming and validating the name.
    ///
    /// Names are limited to letters, digits, `-` and spaces, at most 64 chars.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for an empty, too long, or
    /// ill-formed name.
    pub fn new(name: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("event name must not be empty"));
        }
        if name.chars().count() > MAX_EVENT_NAME_LEN {
            return Err(CoreError::validation(format!(
                "event name must be at most {MAX_EVENT_NAME_LEN} characters"
            )));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ')
        {
            return Err(CoreError::validation(
                "event name may only contain letters, digits, '-' and spaces",
            ));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_name() {
        assert_eq!(EventCreate::new("  Visit 2 - follow-up ").unwrap().name, "Visit 2 - follow-up");
    }

    #[test]
    fn rejects_bad_names() {
        assert!(EventCreate::new("   ").is_err());
        assert!(EventCreate::new("Besuch_1").is_err());
        assert!(EventCreate::new(&"x".repeat(65)).is_err());
    }
}
