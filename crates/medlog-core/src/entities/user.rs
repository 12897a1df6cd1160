use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The logged-in user as returned by `GET /user/me`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    pub user_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub deactivated: bool,
}

impl User {
    /// Whether the role list carries the admin role marker.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Name to show in the UI: display name, falling back to the user name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.user_name)
    }
}
