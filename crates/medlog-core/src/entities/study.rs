use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A study. `name` is an immutable slug; `display_name` is for humans.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Study {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, with = "crate::timestamp::option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deactivated: bool,
    /// Every user may interview in this study without explicit permission.
    #[serde(default)]
    pub no_permissions: bool,
    #[serde(default)]
    pub permissions: Option<StudyPermission>,
}

impl Study {
    /// Display name, or the prettified slug if none is set.
    #[must_use]
    pub fn label(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| crate::display::beautify_name(&self.name))
    }

    /// Whether the caller may record interviews.
    #[must_use]
    pub fn can_interview(&self) -> bool {
        self.no_permissions
            || self
                .permissions
                .as_ref()
                .is_some_and(|p| p.is_study_interviewer || p.is_study_admin)
    }
}

/// The caller's permission flags for one study.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyPermission {
    #[serde(default)]
    pub is_study_viewer: bool,
    #[serde(default)]
    pub is_study_interviewer: bool,
    #[serde(default)]
    pub is_study_admin: bool,
}

/// Body of `POST /study`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyCreate {
    pub name: String,
    pub display_name: Option<String>,
    pub deactivated: bool,
    pub no_permissions: bool,
}

impl StudyCreate {
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            display_name,
            deactivated: false,
            no_permissions: false,
        }
    }
}
