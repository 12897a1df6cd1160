use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, DrugCommands, EventCommands, IntakeCommands, InterviewCommands, LabelCommands,
    StudyCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, show session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Current user.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Studies.
    Study {
        #[command(subcommand)]
        action: StudyCommands,
    },
    /// Study events.
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },
    /// Proband interviews.
    Interview {
        #[command(subcommand)]
        action: InterviewCommands,
    },
    /// Drug intakes.
    Intake {
        #[command(subcommand)]
        action: IntakeCommands,
    },
    /// Drug database.
    Drug {
        #[command(subcommand)]
        action: DrugCommands,
    },
    /// Label translation tables.
    Label {
        #[command(subcommand)]
        action: LabelCommands,
    },
}
