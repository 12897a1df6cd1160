use clap::{Args, Subcommand, ValueEnum};

/// Drug database commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DrugCommands {
    /// Search the drug database.
    Search(DrugSearchArgs),
    /// Show the drug fields used for a purpose.
    Fields(DrugFieldsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DrugSearchArgs {
    pub term: String,
    #[arg(long, default_value_t = 0)]
    pub offset: u64,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct DrugFieldsArgs {
    #[arg(long, value_enum, default_value = "search-result")]
    pub purpose: PurposeArg,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PurposeArg {
    SearchResult,
    DynamicForm,
}
