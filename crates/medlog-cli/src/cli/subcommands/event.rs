use clap::Subcommand;

/// Study events.
#[derive(Clone, Debug, Subcommand)]
pub enum EventCommands {
    /// List events of a study.
    List {
        #[arg(long)]
        study: String,
    },
    /// Create an event in a study.
    Create {
        #[arg(long)]
        study: String,
        name: String,
    },
}
