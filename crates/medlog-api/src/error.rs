//! API client error types.

use medlog_config::ConfigError;
use medlog_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status other than 401.
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// 401 without a refresh token; the session was ended.
    #[error("not authorized, log in again")]
    Unauthorized,

    /// The session ended while this request was in flight, or the retried
    /// request was rejected again.
    #[error("session expired, log in again")]
    SessionExpired,

    #[error("token refresh failed: {0}")]
    RefreshFailed(String),

    #[error("Wrong username or password")]
    LoginRejected,

    /// The interview was created but one of its intakes was not.
    #[error("interview {interview_id} created, {posted} of {total} intakes recorded: {source}")]
    IntakesIncomplete {
        interview_id: String,
        posted: usize,
        total: usize,
        #[source]
        source: Box<ApiError>,
    },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A success response whose body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the user has to log in again to continue.
    #[must_use]
    pub const fn needs_login(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::SessionExpired | Self::RefreshFailed(_)
        )
    }
}
