use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Study { action } => commands::study::handle(&action, ctx, flags).await,
        Commands::Event { action } => commands::event::handle(&action, ctx, flags).await,
        Commands::Interview { action } => commands::interview::handle(&action, ctx, flags).await,
        Commands::Intake { action } => commands::intake::handle(&action, ctx, flags).await,
        Commands::Drug { action } => commands::drug::handle(&action, ctx, flags).await,
        Commands::Label { action } => commands::label::handle(&action, flags),
    }
}
