//! Where redirects go.

use std::sync::Mutex;

use crate::guard::Route;

/// Receives the redirects the client decides on (login, landing).
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}

/// Logs the redirect. Used by front ends that print instead of routing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &Route) {
        tracing::warn!(route = %route, "redirect");
    }
}

/// Remembers every redirect in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .map(|routes| routes.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn count(&self, route: &Route) -> usize {
        self.routes().iter().filter(|r| *r == route).count()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.clone());
        }
    }
}
