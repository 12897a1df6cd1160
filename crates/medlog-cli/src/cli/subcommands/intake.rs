use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

/// Intake commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IntakeCommands {
    /// Run the interview wizard: proband info, drug, confirmation, submit.
    ///
    /// A wizard left unfinished by an earlier run is resumed; flags given
    /// now overwrite what it holds.
    Submit(IntakeSubmitArgs),
    /// Record one more intake for an existing interview.
    ///
    /// Starts from the stored draft, so a rejected intake can be fixed by
    /// passing only the offending flags.
    Add(IntakeAddArgs),
    /// List intakes of an interview.
    List {
        #[arg(long)]
        study: String,
        #[arg(long)]
        interview: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct IntakeSubmitArgs {
    #[arg(long)]
    pub study: String,
    #[arg(long)]
    pub event: String,
    /// External proband id.
    #[arg(long)]
    pub proband: Option<String>,
    #[arg(long)]
    pub interview_number: Option<u32>,
    /// The proband has not taken any medication; no intake is recorded.
    #[arg(long, conflicts_with_all = ["pzn", "custom_drug"])]
    pub no_meds: bool,
    /// Discard an unfinished wizard instead of resuming it.
    #[arg(long)]
    pub fresh: bool,
    #[command(flatten)]
    pub drug: IntakeDrugArgs,
}

#[derive(Clone, Debug, Args)]
pub struct IntakeAddArgs {
    #[arg(long)]
    pub study: String,
    /// Defaults to the interview created last.
    #[arg(long)]
    pub interview: Option<String>,
    #[command(flatten)]
    pub drug: IntakeDrugArgs,
}

/// Fields of a single intake.
#[derive(Clone, Debug, Args)]
pub struct IntakeDrugArgs {
    /// Pharmazentralnummer (`PZN-`, dashes and spaces are ignored).
    #[arg(long, conflicts_with = "custom_drug")]
    pub pzn: Option<String>,
    /// Id of a custom drug.
    #[arg(long)]
    pub custom_drug: Option<String>,
    /// Where the drug information came from (English or German label).
    #[arg(long)]
    pub source: Option<String>,
    /// First day of intake (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Last day of intake (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Prescribing or administering doctor.
    #[arg(long)]
    pub doctor: Option<String>,
    #[arg(long, value_enum)]
    pub mode: Option<IntakeMode>,
    #[arg(long)]
    pub dose_per_day: Option<u32>,
    /// Dose interval for regular intake (English or German label).
    #[arg(long)]
    pub interval: Option<String>,
    /// Yes, No or UNKNOWN.
    #[arg(long)]
    pub consumed_today: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum IntakeMode {
    Regular,
    AsNeeded,
}
