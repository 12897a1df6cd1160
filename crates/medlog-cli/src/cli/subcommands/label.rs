use clap::{Subcommand, ValueEnum};

/// German/English label tables.
#[derive(Clone, Debug, Subcommand)]
pub enum LabelCommands {
    /// Print a label table.
    List {
        #[arg(value_enum)]
        table: LabelTableName,
    },
    /// Translate a label to the other language.
    Translate {
        #[arg(value_enum)]
        table: LabelTableName,
        label: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LabelTableName {
    Source,
    Interval,
}
