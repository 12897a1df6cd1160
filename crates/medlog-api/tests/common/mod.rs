//! In-process MedLog backend on `tiny_http` for client tests.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};

use medlog_api::MedlogClient;
use medlog_auth::{AppState, RecordingNavigator};
use medlog_config::{LoginStrategy, MedlogConfig};

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    /// Path and query, without the `/api` prefix.
    pub url: String,
    pub authorization: Option<String>,
    pub refresh_token: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

impl Seen {
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

pub struct Reply {
    pub status: u16,
    pub body: String,
    pub set_cookie: Option<String>,
    pub delay_ms: u64,
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            set_cookie: None,
            delay_ms: 0,
        }
    }

    pub fn unauthorized() -> Self {
        Self::json(401, serde_json::json!({"detail": "Not authenticated"}))
    }

    pub fn with_cookie(mut self, cookie: &str) -> Self {
        self.set_cookie = Some(cookie.to_string());
        self
    }

    pub fn delayed(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

type Handler = dyn Fn(&Seen) -> Reply + Send + Sync;

pub struct MockBackend {
    server: Arc<tiny_http::Server>,
    seen: Arc<Mutex<Vec<Seen>>>,
    base_url: String,
}

impl MockBackend {
    /// Serve every request on its own thread so slow replies overlap.
    pub fn start(handler: impl Fn(&Seen) -> Reply + Send + Sync + 'static) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("ip listener")
            .port();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handler: Arc<Handler> = Arc::new(handler);

        let accept_server = Arc::clone(&server);
        let accept_seen = Arc::clone(&seen);
        std::thread::spawn(move || {
            for request in accept_server.incoming_requests() {
                let handler = Arc::clone(&handler);
                let seen = Arc::clone(&accept_seen);
                std::thread::spawn(move || serve(request, handler.as_ref(), &seen));
            }
        });

        Self {
            server,
            seen,
            base_url: format!("http://127.0.0.1:{port}/api"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.seen()
            .iter()
            .filter(|s| s.method == method && s.path() == path)
            .count()
    }

    pub fn config(&self, strategy: LoginStrategy) -> MedlogConfig {
        let mut config = MedlogConfig::default();
        config.api.base_url = self.base_url.clone();
        config.api.timeout_secs = 5;
        config.api.login_strategy = strategy;
        config
    }

    pub fn client(&self, strategy: LoginStrategy) -> (MedlogClient, AppState, Arc<RecordingNavigator>) {
        let state = AppState::new();
        let navigator = Arc::new(RecordingNavigator::new());
        let client = MedlogClient::new(&self.config(strategy), state.clone(), navigator.clone())
            .expect("client builds");
        (client, state, navigator)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

fn serve(mut request: tiny_http::Request, handler: &Handler, seen: &Mutex<Vec<Seen>>) {
    let header = |name: &'static str| {
        request
            .headers()
            .iter()
            .find(|h| h.field.equiv(name))
            .map(|h| h.value.as_str().to_string())
    };
    let authorization = header("Authorization");
    let refresh_token = header("refresh-token");
    let cookie = header("Cookie");
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);

    let entry = Seen {
        method: request.method().as_str().to_string(),
        url: request.url().trim_start_matches("/api").to_string(),
        authorization,
        refresh_token,
        cookie,
        body,
    };
    seen.lock().unwrap().push(entry.clone());

    let reply = handler(&entry);
    if reply.delay_ms > 0 {
        std::thread::sleep(std::time::Duration::from_millis(reply.delay_ms));
    }
    let mut response = tiny_http::Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(
            tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
        );
    if let Some(cookie) = reply.set_cookie {
        response = response
            .with_header(tiny_http::Header::from_bytes("Set-Cookie", cookie.as_bytes()).unwrap());
    }
    let _ = request.respond(response);
}

pub fn user_json(roles: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": "0b9f4c1e",
        "email": "rosalind.franklin@example.org",
        "display_name": "Rosalind Franklin",
        "user_name": "rosalind.franklin",
        "roles": roles,
        "deactivated": false
    })
}

pub fn study_page() -> serde_json::Value {
    serde_json::json!({
        "total_count": 2,
        "offset": 0,
        "count": 2,
        "items": [
            {"id": "s-1", "name": "baria-ddz", "display_name": null, "created_at": "2024-03-01T08:00:00", "deactivated": false, "no_permissions": true},
            {"id": "s-2", "name": "plis", "display_name": "PLIS", "created_at": "2024-04-11T10:15:00.250", "deactivated": false, "no_permissions": false}
        ]
    })
}
