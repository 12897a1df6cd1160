//! # medlog-config
//!
//! Layered configuration loading for the MedLog client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MEDLOG_*` prefix, `__` as separator)
//! 2. Project-level `.medlog/config.toml`
//! 3. User-level `~/.config/medlog/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `MEDLOG_API__BASE_URL` -> `api.base_url`,
//! `MEDLOG_AUTH__ADMIN_ROLE_NAME` -> `auth.admin_role_name`, etc.
//!
//! ```no_run
//! use medlog_config::MedlogConfig;
//!
//! let config = MedlogConfig::load_with_dotenv().expect("config");
//! config.validate().expect("usable config");
//! println!("backend: {}", config.api.base());
//! ```

mod api;
mod auth;
mod error;
mod general;
mod storage;

pub use api::{ApiConfig, LoginStrategy};
pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MedlogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MedlogConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then all other sources.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".medlog/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MEDLOG_").split("__"))
    }

    /// Check every section the client depends on.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("medlog").join("config.toml"))
    }
}
