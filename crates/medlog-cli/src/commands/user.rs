use medlog_api::ApiError;
use medlog_core::entities::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct UserMeResponse {
    #[serde(flatten)]
    user: User,
    is_admin: bool,
}

/// Handle `medlog user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Me => {
            let user = ctx.client.user_me().await?;
            let is_admin = match ctx.client.refresh_admin_status().await {
                Ok(is_admin) => is_admin,
                // Role listing is admin-only on some backends.
                Err(ApiError::Api { status: 403, .. }) => {
                    tracing::debug!("role list not readable, using role name only");
                    ctx.state.session.write().await.clear_error();
                    ctx.state.user.read().await.is_admin
                }
                Err(error) => return Err(error.into()),
            };
            output(&UserMeResponse { user, is_admin }, flags.format)
        }
    }
}
