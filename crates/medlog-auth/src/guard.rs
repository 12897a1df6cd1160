//! Routes and the authentication guard in front of them.

use std::fmt;

use crate::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    /// `/auth`
    Login,
    /// `/user`, where a fresh login lands.
    Landing,
    Profile,
    Studies,
    Study(String),
    NotFound(String),
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".into(),
            Self::Login => "/auth".into(),
            Self::Landing => "/user".into(),
            Self::Profile => "/user/profile".into(),
            Self::Studies => "/study".into(),
            Self::Study(id) => format!("/study/{id}"),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Map a path back to its route. Unknown paths become `NotFound`.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Root,
            ["auth"] => Self::Login,
            ["user"] => Self::Landing,
            ["user", "profile"] => Self::Profile,
            ["study"] => Self::Studies,
            ["study", id] => Self::Study((*id).to_string()),
            _ => Self::NotFound(path.to_string()),
        }
    }

    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Landing | Self::Profile | Self::Studies | Self::Study(_)
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(Route),
}

/// Decide whether `target` may be entered with `session`.
///
/// Auth-required routes without a live session go to the login route. The
/// login route (and the root) with a live session go to the landing route.
#[must_use]
pub fn guard(target: &Route, session: &SessionState) -> GuardDecision {
    let authenticated = session.is_authenticated();
    match target {
        Route::Root | Route::Login if authenticated => GuardDecision::Redirect(Route::Landing),
        Route::Root => GuardDecision::Redirect(Route::Login),
        route if route.requires_auth() && !authenticated => {
            GuardDecision::Redirect(Route::Login)
        }
        _ => GuardDecision::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use medlog_core::entities::TokenPair;
    use pretty_assertions::assert_eq;

    use super::*;

    fn logged_in() -> SessionState {
        let mut session = SessionState::default();
        session.begin(TokenPair {
            access_token: "t".into(),
            refresh_token: None,
            token_type: None,
        });
        session
    }

    #[test]
    fn auth_required_route_without_token_redirects_to_login() {
        let session = SessionState::default();
        for route in [
            Route::Landing,
            Route::Profile,
            Route::Studies,
            Route::Study("s-1".into()),
        ] {
            assert_eq!(
                guard(&route, &session),
                GuardDecision::Redirect(Route::Login),
                "{route}"
            );
        }
    }

    #[test]
    fn login_route_while_logged_in_redirects_to_landing() {
        assert_eq!(
            guard(&Route::Login, &logged_in()),
            GuardDecision::Redirect(Route::Landing)
        );
        assert_eq!(guard(&Route::Login, &SessionState::default()), GuardDecision::Proceed);
    }

    #[test]
    fn root_always_redirects() {
        assert_eq!(
            guard(&Route::Root, &SessionState::default()),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(
            guard(&Route::Root, &logged_in()),
            GuardDecision::Redirect(Route::Landing)
        );
    }

    #[test]
    fn expired_session_is_not_authenticated() {
        let mut session = logged_in();
        session.mark_expired();
        assert_eq!(
            guard(&Route::Studies, &session),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(guard(&Route::Studies, &logged_in()), GuardDecision::Proceed);
    }

    #[test]
    fn paths_roundtrip() {
        for route in [
            Route::Root,
            Route::Login,
            Route::Landing,
            Route::Profile,
            Route::Studies,
            Route::Study("c3a9".into()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(Route::parse("/auth/"), Route::Login);
        assert_eq!(Route::parse("/nope/x/y"), Route::NotFound("/nope/x/y".into()));
        assert_eq!(
            guard(&Route::parse("/nope"), &SessionState::default()),
            GuardDecision::Proceed
        );
    }
}
