use crate::cli::GlobalFlags;
use crate::cli::subcommands::EventCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `medlog event`.
pub async fn handle(
    action: &EventCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EventCommands::List { study } => {
            let mut events = ctx.client.list_events(study).await?;
            events.sort_by_key(|event| event.order_position);
            output(&events, flags.format)
        }
        EventCommands::Create { study, name } => {
            let event = ctx.client.create_event(study, name).await?;
            output(&event, flags.format)
        }
    }
}
