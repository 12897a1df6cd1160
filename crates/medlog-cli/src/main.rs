use anyhow::Context;
use clap::Parser;
use medlog_config::MedlogConfig;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("medlog error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    if let cli::Commands::Label { action } = &cli.command {
        return commands::label::handle(action, &flags);
    }

    let config = MedlogConfig::load_with_dotenv().context("failed to load configuration")?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config)?;

    if let Some(route) = commands::route::route_for(&cli.command) {
        let session = ctx.state.session.read().await.clone();
        commands::route::check(&route, &session)?;
    }

    let command = cli.command;
    let persist = command_persists_state(&command);
    let result = commands::dispatch::dispatch(command, &ctx, &flags).await;

    // Failed commands may still have changed the session (expiry, errors).
    if persist
        && let Err(error) = ctx.persist().await
    {
        if result.is_ok() {
            return Err(error);
        }
        tracing::warn!("{error:#}");
    }
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MEDLOG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Logout already wiped the state directory and status only reads it.
fn command_persists_state(command: &cli::Commands) -> bool {
    use crate::cli::subcommands::AuthCommands;

    !matches!(
        command,
        cli::Commands::Auth {
            action: AuthCommands::Logout | AuthCommands::Status
        } | cli::Commands::Label { .. }
    )
}
