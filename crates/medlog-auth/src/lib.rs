//! # medlog-auth
//!
//! Client-side session handling for MedLog: the application state stores,
//! their per-key JSON persistence, the route guard, the navigator seam used
//! for login redirects, and unverified JWT expiry decoding.

pub mod error;
pub mod guard;
pub mod navigate;
pub mod session;
pub mod state;
pub mod state_store;
pub mod token;

pub use error::AuthError;
pub use guard::{GuardDecision, Route, guard};
pub use navigate::{Navigator, RecordingNavigator, TracingNavigator};
pub use session::SessionState;
pub use state::{AppState, DrugState, ProbandState, StudyState, UserState};
pub use state_store::{StateStore, StoreKey};

/// Fail unless the session is logged in and not expired.
///
/// # Errors
///
/// Returns `AuthError::SessionExpired` after an unrecoverable 401 and
/// `AuthError::NotAuthenticated` otherwise.
pub fn require_session(session: &SessionState) -> Result<(), AuthError> {
    if session.is_authenticated() {
        Ok(())
    } else if session.expired_token {
        Err(AuthError::SessionExpired)
    } else {
        Err(AuthError::NotAuthenticated)
    }
}
