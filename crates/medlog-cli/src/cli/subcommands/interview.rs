use clap::{Args, Subcommand};

/// Interview commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InterviewCommands {
    /// Start an interview with a proband at an event.
    Create(InterviewCreateArgs),
    /// List a proband's interviews.
    List {
        #[arg(long)]
        study: String,
        #[arg(long)]
        proband: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InterviewCreateArgs {
    #[arg(long)]
    pub study: String,
    #[arg(long)]
    pub event: String,
    /// External proband id.
    #[arg(long)]
    pub proband: String,
    /// The proband has not taken any medication.
    #[arg(long)]
    pub no_meds: bool,
    #[arg(long)]
    pub interview_number: Option<u32>,
}
