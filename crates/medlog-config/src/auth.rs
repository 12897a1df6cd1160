//! Authorization settings.

use serde::{Deserialize, Serialize};

fn default_admin_role_name() -> String {
    "medlog-admin".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Role that grants admin status on its own.
    #[serde(default = "default_admin_role_name")]
    pub admin_role_name: String,

    /// OpenID Connect issuer URL.
    #[serde(default)]
    pub oidc_issuer: Option<String>,

    #[serde(default)]
    pub oidc_client_id: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_role_name: default_admin_role_name(),
            oidc_issuer: None,
            oidc_client_id: None,
        }
    }
}

impl AuthConfig {
    /// Both the issuer and the client id are set and non-empty.
    #[must_use]
    pub fn is_oidc_configured(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.oidc_issuer) && set(&self.oidc_client_id)
    }
}
