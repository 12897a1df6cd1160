mod login;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(serde::Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

/// Handle `medlog auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Logout => {
            ctx.client.logout().await;
            ctx.store.clear()?;
            output(&AuthLogoutResponse { cleared: true }, flags.format)
        }
        AuthCommands::Status => status::handle(ctx, flags).await,
    }
}
