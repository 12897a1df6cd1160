//! Token/session state and its lifecycle.
//!
//! Every change to the credentials bumps `epoch`. The API client compares
//! epochs across the refresh lock to tell whether another caller already
//! refreshed (or cleared) the session while it was waiting.

use medlog_core::entities::TokenPair;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub logged_in: bool,
    /// Last login attempt was rejected by the backend.
    pub login_rejected: bool,
    /// A 401 ended the session and it could not be renewed.
    pub expired_token: bool,
    /// Transient backend error detail for display.
    pub error: Option<String>,
    #[serde(skip)]
    epoch: u64,
}

impl SessionState {
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Bearer token to attach, if any. Cookie sessions have none.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Logged in and not known to be expired.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.logged_in && !self.expired_token
    }

    /// Start a bearer-token session from a successful token login.
    pub fn begin(&mut self, tokens: TokenPair) {
        self.access_token = Some(tokens.access_token);
        self.refresh_token = tokens.refresh_token;
        self.mark_logged_in();
    }

    /// Start a cookie session. The cookie lives in the HTTP client's jar.
    pub fn begin_cookie_session(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.mark_logged_in();
    }

    /// Swap in a refreshed access token; the refresh token is kept.
    pub fn replace_access_token(&mut self, access_token: String) {
        self.access_token = Some(access_token);
        self.expired_token = false;
        self.epoch += 1;
    }

    /// A 401 that could not be recovered from. Credentials are dropped.
    pub fn mark_expired(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.logged_in = false;
        self.expired_token = true;
        self.epoch += 1;
    }

    /// The backend rejected the credentials of a login attempt.
    ///
    /// An already established session is left untouched.
    pub fn reject_login(&mut self, message: impl Into<String>) {
        self.login_rejected = true;
        self.error = Some(message.into());
    }

    pub fn record_error(&mut self, detail: impl Into<String>) {
        self.error = Some(detail.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop everything (logout or failed refresh).
    pub fn reset(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self {
            epoch,
            ..Self::default()
        };
    }

    fn mark_logged_in(&mut self) {
        self.logged_in = true;
        self.login_rejected = false;
        self.expired_token = false;
        self.error = None;
        self.epoch += 1;
    }
}
