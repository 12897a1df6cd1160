//! Login, logout and the current user.

use medlog_auth::Route;
use medlog_config::LoginStrategy;
use medlog_core::entities::{Role, TokenPair, User};
use reqwest::StatusCode;
use serde::Serialize;

use crate::client::MedlogClient;
use crate::error::ApiError;
use crate::http::{check_response, decode};
use crate::request::ApiRequest;

const TOKEN_PATH: &str = "auth/token";
const SESSION_LOGIN_PATH: &str = "auth/basic/login/session";
const LOGIN_REJECTED: &str = "Wrong username or password";

#[derive(Serialize)]
struct SessionLogin<'a> {
    username: &'a str,
    password: &'a str,
}

impl MedlogClient {
    /// Log in with the configured strategy, load the user, and navigate to
    /// the landing route.
    ///
    /// # Errors
    ///
    /// [`ApiError::LoginRejected`] if the backend refuses the credentials
    /// (the session's `login_rejected` flag is set, no navigation happens),
    /// otherwise any transport or API error.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let request = match self.strategy {
            LoginStrategy::Token => ApiRequest::post_form(
                TOKEN_PATH,
                &[("username", username), ("password", password)],
            ),
            LoginStrategy::Session => {
                ApiRequest::post_json(SESSION_LOGIN_PATH, &SessionLogin { username, password })?
            }
        };

        let resp = self.send_once(&request, None).await?;
        if matches!(
            resp.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::BAD_REQUEST
        ) {
            tracing::warn!(username, status = resp.status().as_u16(), "login rejected");
            self.state.session.write().await.reject_login(LOGIN_REJECTED);
            return Err(ApiError::LoginRejected);
        }
        let resp = match check_response(resp).await {
            Ok(resp) => resp,
            Err(error) => {
                if let ApiError::Api { detail, .. } = &error {
                    self.state.session.write().await.record_error(detail.clone());
                }
                return Err(error);
            }
        };

        match self.strategy {
            LoginStrategy::Token => {
                let tokens: TokenPair = decode(resp).await?;
                self.state.session.write().await.begin(tokens);
            }
            LoginStrategy::Session => self.state.session.write().await.begin_cookie_session(),
        }
        tracing::info!(username, strategy = ?self.strategy, "logged in");

        let user = self.user_me().await?;
        self.navigate(&Route::Landing);
        Ok(user)
    }

    /// Forget the session, the user and every cached store, then go to the
    /// login route. The backend keeps no server-side logout.
    pub async fn logout(&self) {
        self.state.clear_all().await;
        tracing::info!("logged out");
        self.navigate(&Route::Login);
    }

    /// `GET user/me`, replacing the stored user.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn user_me(&self) -> Result<User, ApiError> {
        let user: User = self.fetch(ApiRequest::get("user/me")).await?;
        self.state
            .user
            .write()
            .await
            .set_user(user.clone(), &self.admin_role_name);
        Ok(user)
    }

    /// `GET role`.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.fetch(ApiRequest::get("role")).await
    }

    /// Recompute the stored admin flag from the user's roles.
    ///
    /// The user is an admin when they carry the configured admin role or
    /// any role the backend flags with admin permissions.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn refresh_admin_status(&self) -> Result<bool, ApiError> {
        let stored = self.state.user.read().await.user.clone();
        let user = match stored {
            Some(user) => user,
            None => self.user_me().await?,
        };
        let roles = self.list_roles().await?;
        let is_admin = user.has_role(&self.admin_role_name)
            || roles
                .iter()
                .any(|role| role.has_admin_permissions && user.has_role(&role.role_name));
        self.state.user.write().await.is_admin = is_admin;
        Ok(is_admin)
    }
}
