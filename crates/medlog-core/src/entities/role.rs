use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A role from `GET /role`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Role {
    pub role_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub has_admin_permissions: bool,
}
