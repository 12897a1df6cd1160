use clap::Subcommand;

/// Study commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudyCommands {
    /// List studies visible to the current user.
    List,
    /// Create a study.
    Create {
        /// Immutable slug, e.g. `baria-ddz`.
        name: String,
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Show one study.
    Get { id: String },
}
