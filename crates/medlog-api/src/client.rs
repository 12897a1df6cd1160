use std::sync::Arc;
use std::time::Duration;

use medlog_auth::{AppState, Navigator, Route};
use medlog_config::{LoginStrategy, MedlogConfig};

use crate::error::ApiError;
use crate::request::{ApiRequest, Body};

/// HTTP client for one MedLog backend, bound to one application state.
pub struct MedlogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) strategy: LoginStrategy,
    pub(crate) admin_role_name: String,
    pub(crate) default_limit: u32,
    pub(crate) only_current_medications: bool,
    pub(crate) state: AppState,
    pub(crate) navigator: Arc<dyn Navigator>,
    /// Held for the duration of one token refresh.
    pub(crate) refresh_lock: tokio::sync::Mutex<()>,
}

impl MedlogClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an unusable `api` section and
    /// [`ApiError::Http`] if the TLS backend cannot be initialised.
    pub fn new(
        config: &MedlogConfig,
        state: AppState,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("medlog/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .cookie_store(true)
            .build()?;
        Ok(Self {
            http,
            base_url: config.api.base().to_string(),
            strategy: config.api.login_strategy,
            admin_role_name: config.auth.admin_role_name.clone(),
            default_limit: config.general.default_limit,
            only_current_medications: config.general.only_current_medications,
            state,
            navigator,
            refresh_lock: tokio::sync::Mutex::new(()),
        })
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn strategy(&self) -> LoginStrategy {
        self.strategy
    }

    pub(crate) fn navigate(&self, route: &Route) {
        self.navigator.navigate(route);
    }

    /// Send `request` once, with `bearer` if given. No status handling.
    pub(crate) async fn send_once(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut builder = self
            .http
            .request(request.method.clone(), request.url(&self.base_url));
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match &request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(value),
            Body::Form(fields) => builder.form(fields),
        };
        tracing::debug!(method = %request.method, path = %request.path, "request");
        builder.send().await
    }
}
