//! The screen each command stands in for, checked by the route guard
//! before anything is sent.

use anyhow::bail;
use medlog_auth::{GuardDecision, Route, SessionState, guard, require_session};

use crate::cli::root_commands::Commands;
use crate::cli::subcommands::{
    AuthCommands, EventCommands, IntakeCommands, InterviewCommands, StudyCommands,
};

/// Route guarding `command`, or `None` for purely local commands.
#[must_use]
pub fn route_for(command: &Commands) -> Option<Route> {
    let route = match command {
        Commands::Auth {
            action: AuthCommands::Login(_),
        } => Route::Login,
        Commands::Auth { .. } | Commands::Label { .. } => return None,
        Commands::User { .. } => Route::Profile,
        Commands::Study { action } => match action {
            StudyCommands::Get { id } => Route::Study(id.clone()),
            StudyCommands::List | StudyCommands::Create { .. } => Route::Studies,
        },
        Commands::Event { action } => match action {
            EventCommands::List { study } | EventCommands::Create { study, .. } => {
                Route::Study(study.clone())
            }
        },
        Commands::Interview { action } => match action {
            InterviewCommands::Create(args) => Route::Study(args.study.clone()),
            InterviewCommands::List { study, .. } => Route::Study(study.clone()),
        },
        Commands::Intake { action } => match action {
            IntakeCommands::Submit(args) => Route::Study(args.study.clone()),
            IntakeCommands::Add(args) => Route::Study(args.study.clone()),
            IntakeCommands::List { study, .. } => Route::Study(study.clone()),
        },
        Commands::Drug { .. } => Route::Landing,
    };
    Some(route)
}

/// Run the guard for `route`.
///
/// A logged-in user asking for the login route is let through so they can
/// switch accounts.
pub fn check(route: &Route, session: &SessionState) -> anyhow::Result<()> {
    match guard(route, session) {
        GuardDecision::Proceed => Ok(()),
        GuardDecision::Redirect(Route::Landing) if *route == Route::Login => {
            tracing::info!("already logged in, starting a new session");
            Ok(())
        }
        GuardDecision::Redirect(Route::Login) => {
            require_session(session)?;
            bail!("{route} requires a login")
        }
        GuardDecision::Redirect(other) => bail!("{route} is not reachable, redirected to {other}"),
    }
}
