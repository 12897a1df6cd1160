use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tokens returned by `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of a successful `POST /auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
}
