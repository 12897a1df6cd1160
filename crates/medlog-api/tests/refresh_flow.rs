//! 401 handling: refresh once, retry once, and never refresh twice for the
//! same expired token.

mod common;

use common::{MockBackend, Reply, study_page, user_json};
use std::sync::Arc;

use medlog_api::{ApiError, MedlogClient};
use medlog_auth::{AppState, RecordingNavigator, Route};
use medlog_config::{LoginStrategy, MedlogConfig};
use medlog_core::entities::TokenPair;
use pretty_assertions::assert_eq;

fn tokens(access: &str) -> TokenPair {
    TokenPair {
        access_token: access.into(),
        refresh_token: Some("rt-1".into()),
        token_type: Some("bearer".into()),
    }
}

/// Studies need `Bearer new`; refresh hands out `new` for `rt-1`.
fn refreshing_backend(refresh_delay_ms: u64) -> MockBackend {
    MockBackend::start(move |seen| match (seen.method.as_str(), seen.path()) {
        ("GET", "/study") if seen.authorization.as_deref() == Some("Bearer new") => {
            Reply::json(200, study_page())
        }
        ("GET", "/study") => Reply::unauthorized(),
        ("POST", "/auth/refresh") if seen.refresh_token.as_deref() == Some("Bearer rt-1") => {
            Reply::json(200, serde_json::json!({"access_token": "new"})).delayed(refresh_delay_ms)
        }
        _ => Reply::unauthorized(),
    })
}

#[tokio::test]
async fn refresh_then_single_retry_with_new_token() {
    let backend = refreshing_backend(0);
    let (client, state, navigator) = backend.client(LoginStrategy::Token);
    state.session.write().await.begin(tokens("old"));

    let studies = client.list_studies().await.expect("recovered after refresh");
    assert_eq!(studies.len(), 2);

    let seen = backend.seen();
    let calls: Vec<(&str, Option<&str>)> = seen
        .iter()
        .map(|s| (s.path(), s.authorization.as_deref()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("/study", Some("Bearer old")),
            ("/auth/refresh", None),
            ("/study", Some("Bearer new")),
        ]
    );
    assert_eq!(state.session.read().await.bearer(), Some("new"));
    assert_eq!(state.session.read().await.refresh_token(), Some("rt-1"));
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn refresh_failure_clears_state_and_navigates_once() {
    let backend = MockBackend::start(|seen| match seen.path() {
        "/auth/refresh" => Reply::json(401, serde_json::json!({"detail": "refresh token revoked"})),
        _ => Reply::unauthorized(),
    });
    let (client, state, navigator) = backend.client(LoginStrategy::Token);
    state.session.write().await.begin(tokens("old"));
    state
        .user
        .write()
        .await
        .set_user(serde_json::from_value(user_json(&[])).unwrap(), "medlog-admin");

    let err = client.list_studies().await.unwrap_err();
    assert!(matches!(err, ApiError::RefreshFailed(_)), "{err:?}");
    assert!(err.needs_login());

    let session = state.session.read().await.clone();
    assert!(!session.logged_in);
    assert_eq!(session.bearer(), None);
    assert_eq!(session.refresh_token(), None);
    assert!(state.user.read().await.user.is_none());

    assert_eq!(navigator.routes(), vec![Route::Login]);
    assert_eq!(backend.count("GET", "/study"), 1);
    assert_eq!(backend.count("POST", "/auth/refresh"), 1);
}

#[tokio::test]
async fn concurrent_401s_share_one_refresh() {
    let backend = refreshing_backend(150);
    let (client, state, navigator) = backend.client(LoginStrategy::Token);
    state.session.write().await.begin(tokens("old"));

    let (a, b, c) = tokio::join!(
        client.list_studies(),
        client.list_studies(),
        client.list_studies()
    );
    assert!(a.is_ok() && b.is_ok() && c.is_ok(), "{a:?} {b:?} {c:?}");

    assert_eq!(backend.count("POST", "/auth/refresh"), 1);
    let seen = backend.seen();
    let old = seen
        .iter()
        .filter(|s| s.path() == "/study" && s.authorization.as_deref() == Some("Bearer old"))
        .count();
    let new = seen
        .iter()
        .filter(|s| s.path() == "/study" && s.authorization.as_deref() == Some("Bearer new"))
        .count();
    assert_eq!((old, new), (3, 3));
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn concurrent_refresh_failure_navigates_once() {
    let backend = MockBackend::start(|seen| match seen.path() {
        "/auth/refresh" => Reply::unauthorized().delayed(100),
        _ => Reply::unauthorized(),
    });
    let (client, state, navigator) = backend.client(LoginStrategy::Token);
    state.session.write().await.begin(tokens("old"));

    let (a, b) = tokio::join!(client.list_studies(), client.list_studies());
    let errors = [a.unwrap_err(), b.unwrap_err()];
    assert_eq!(
        errors.iter().filter(|e| matches!(e, ApiError::RefreshFailed(_))).count(),
        1
    );
    assert_eq!(
        errors.iter().filter(|e| matches!(e, ApiError::SessionExpired)).count(),
        1
    );
    assert_eq!(backend.count("POST", "/auth/refresh"), 1);
    assert_eq!(navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn retried_request_rejected_again_expires_session() {
    let backend = MockBackend::start(|seen| match seen.path() {
        "/auth/refresh" => Reply::json(200, serde_json::json!({"access_token": "new"})),
        _ => Reply::unauthorized(),
    });
    let (client, state, navigator) = backend.client(LoginStrategy::Token);
    state.session.write().await.begin(tokens("old"));

    let err = client.list_studies().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired), "{err:?}");
    assert_eq!(backend.count("GET", "/study"), 2);
    assert_eq!(backend.count("POST", "/auth/refresh"), 1);
    assert!(state.session.read().await.expired_token);
    assert_eq!(navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn cookie_session_401_redirects_without_refresh() {
    let backend = MockBackend::start(|_| Reply::unauthorized());
    let (client, state, navigator) = backend.client(LoginStrategy::Session);
    state.session.write().await.begin_cookie_session();

    let err = client.list_studies().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized), "{err:?}");
    assert_eq!(backend.count("POST", "/auth/refresh"), 0);
    assert_eq!(backend.count("GET", "/study"), 1);

    let session = state.session.read().await.clone();
    assert!(!session.logged_in);
    assert!(session.expired_token);
    assert_eq!(navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn other_errors_record_detail_without_retry() {
    let backend = MockBackend::start(|seen| match seen.path() {
        "/study/missing/event" => Reply::json(404, serde_json::json!({"detail": "Study not found"})),
        _ => Reply::json(200, serde_json::json!([])),
    });
    let (client, state, navigator) = backend.client(LoginStrategy::Token);
    state.session.write().await.begin(tokens("old"));

    let err = client.list_events("missing").await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 404, .. }), "{err:?}");
    assert_eq!(
        state.session.read().await.error.as_deref(),
        Some("Study not found")
    );
    assert_eq!(backend.seen().len(), 1);
    assert!(navigator.routes().is_empty());

    client.list_events("s-1").await.expect("empty event list");
    assert_eq!(state.session.read().await.error, None);
}

#[tokio::test]
async fn transport_failure_is_http_error() {
    let mut config = MedlogConfig::default();
    config.api.base_url = "http://127.0.0.1:9/api".into();
    config.api.timeout_secs = 2;

    let navigator = Arc::new(RecordingNavigator::new());
    let client = MedlogClient::new(&config, AppState::new(), navigator.clone()).unwrap();
    let err = client.list_studies().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)), "{err:?}");
    assert!(navigator.routes().is_empty());
}
