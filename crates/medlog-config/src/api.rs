//! MedLog backend connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8888/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

/// How the client authenticates against the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginStrategy {
    /// `POST /auth/token`, bearer access token plus refresh token.
    #[default]
    Token,
    /// `POST /auth/basic/login/session`, cookie session without refresh.
    Session,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend root, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub login_strategy: LoginStrategy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            login_strategy: LoginStrategy::default(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash, ready for `{base}/{path}` joins.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check the fields the HTTP client cannot work without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for an empty base URL and
    /// [`ConfigError::InvalidValue`] for a non-http(s) URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{url}' is not an http(s) URL"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
