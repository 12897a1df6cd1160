use medlog_auth::token::{EXPIRY_BUFFER_SECS, decode_expiry, is_near_expiry};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    strategy: String,
    backend: String,
    user: Option<String>,
    is_admin: bool,
    expired: bool,
    login_rejected: bool,
    expires_at: Option<String>,
    near_expiry: bool,
    error: Option<String>,
}

/// Report the stored session without contacting the backend.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.state.session.read().await.clone();
    let user = ctx.state.user.read().await.clone();

    let expires_at = session
        .bearer()
        .and_then(|token| decode_expiry(token).ok())
        .map(|at| at.to_rfc3339());
    let near_expiry = session
        .bearer()
        .is_some_and(|token| is_near_expiry(token, EXPIRY_BUFFER_SECS));

    output(
        &AuthStatusResponse {
            authenticated: session.is_authenticated(),
            strategy: format!("{:?}", ctx.client.strategy()).to_lowercase(),
            backend: ctx.client.base_url().to_string(),
            user: user.user.as_ref().map(|u| u.label().to_string()),
            is_admin: user.is_admin,
            expired: session.expired_token,
            login_rejected: session.login_rejected,
            expires_at,
            near_expiry,
            error: session.error,
        },
        flags.format,
    )
}
