//! Authenticated sending with single-flight refresh-and-retry.
//!
//! ```text
//!   send ──401──▶ lock ──epoch moved?──yes──▶ logged in? ─▶ retry with current token
//!                  │                               └─no──▶ SessionExpired
//!                  └─no──▶ refresh token? ─no──▶ expire + navigate(login)
//!                              └─yes─▶ POST auth/refresh ─ok──▶ retry once
//!                                             └─err─▶ clear + navigate(login)
//! ```
//!
//! The session epoch changes on every credential change, so a caller that
//! waited on the lock can tell that a refresh (or logout) already happened
//! and must not start another one.

use medlog_auth::Route;
use medlog_core::entities::AccessToken;
use reqwest::StatusCode;
use reqwest::header::HeaderValue;

use crate::client::MedlogClient;
use crate::error::ApiError;
use crate::http::{check_response, decode};
use crate::request::ApiRequest;

const REFRESH_PATH: &str = "auth/refresh";
const REFRESH_HEADER: &str = "refresh-token";

impl MedlogClient {
    /// Send `request` with the session's bearer token.
    ///
    /// A 401 is recovered from at most once via a token refresh. Other
    /// non-success statuses are returned as [`ApiError::Api`] and their
    /// detail is stored in the session's `error`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] on transport failure, [`ApiError::Api`] on other
    /// statuses, [`ApiError::Unauthorized`], [`ApiError::SessionExpired`] or
    /// [`ApiError::RefreshFailed`] when the session cannot be recovered.
    pub async fn send_authed(&self, request: ApiRequest) -> Result<reqwest::Response, ApiError> {
        let (bearer, epoch) = {
            let mut session = self.state.session.write().await;
            session.clear_error();
            (session.bearer().map(str::to_owned), session.epoch())
        };

        let resp = self.send_once(&request, bearer.as_deref()).await?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return self.checked(resp).await;
        }

        tracing::debug!(path = %request.path, "401, attempting token refresh");
        let bearer = self.renewed_token(epoch).await?;
        let retry = self.send_once(&request, bearer.as_deref()).await?;
        if retry.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!(path = %request.path, "retried request rejected again");
            self.expire_session().await;
            return Err(ApiError::SessionExpired);
        }
        self.checked(retry).await
    }

    /// Send and decode a JSON response.
    pub(crate) async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        let resp = self.send_authed(request).await?;
        decode(resp).await
    }

    /// A bearer token valid after the 401 seen at `seen_epoch`.
    async fn renewed_token(&self, seen_epoch: u64) -> Result<Option<String>, ApiError> {
        let _flight = self.refresh_lock.lock().await;

        let session = self.state.session.read().await.clone();
        if session.epoch() != seen_epoch {
            return if session.is_authenticated() {
                tracing::debug!("reusing credentials renewed by a concurrent request");
                Ok(session.bearer().map(str::to_owned))
            } else {
                Err(ApiError::SessionExpired)
            };
        }

        let Some(refresh_token) = session.refresh_token() else {
            self.expire_session().await;
            return Err(ApiError::Unauthorized);
        };

        match self.request_refresh(refresh_token).await {
            Ok(access_token) => {
                self.state
                    .session
                    .write()
                    .await
                    .replace_access_token(access_token.clone());
                tracing::info!("access token refreshed");
                Ok(Some(access_token))
            }
            Err(error) => {
                tracing::warn!(%error, "token refresh failed, clearing session");
                self.state.clear_auth().await;
                self.state.session.write().await.mark_expired();
                self.navigate(&Route::Login);
                Err(ApiError::RefreshFailed(error.to_string()))
            }
        }
    }

    async fn request_refresh(&self, refresh_token: &str) -> Result<String, ApiError> {
        let header = HeaderValue::from_str(&format!("Bearer {refresh_token}"))
            .map_err(|e| ApiError::RefreshFailed(format!("unusable refresh token: {e}")))?;
        let url = format!("{}/{REFRESH_PATH}", self.base_url);
        let resp = self
            .http
            .post(url)
            .header(REFRESH_HEADER, header)
            .send()
            .await?;
        let token: AccessToken = decode(check_response(resp).await?).await?;
        Ok(token.access_token)
    }

    /// Mark the session expired and send the user to the login route.
    ///
    /// Only the first caller navigates; an already expired session is left
    /// alone.
    pub(crate) async fn expire_session(&self) {
        let first = {
            let mut session = self.state.session.write().await;
            let first = !session.expired_token;
            if first {
                session.mark_expired();
            }
            first
        };
        if first {
            tracing::warn!("session ended by 401, redirecting to login");
            self.navigate(&Route::Login);
        }
    }

    /// Pass successes through; record the detail of other failures.
    async fn checked(&self, resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        match check_response(resp).await {
            Ok(resp) => Ok(resp),
            Err(ApiError::Api { status, detail }) => {
                tracing::warn!(status, %detail, "request failed");
                self.state.session.write().await.record_error(detail.clone());
                Err(ApiError::Api { status, detail })
            }
            Err(other) => Err(other),
        }
    }
}
