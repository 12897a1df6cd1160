//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default drug search page size.
const fn default_limit() -> u32 {
    100
}

const fn default_only_current_medications() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for drug search.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Restrict drug search to drugs currently on the market.
    #[serde(default = "default_only_current_medications")]
    pub only_current_medications: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            only_current_medications: default_only_current_medications(),
        }
    }
}
