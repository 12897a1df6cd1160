use medlog_core::labels::{INTERVAL_OF_DAILY_DOSE, LabelTable, SOURCE_OF_DRUG_INFORMATION};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{LabelCommands, LabelTableName};
use crate::output::output;

#[derive(Serialize)]
struct LabelRow {
    english: &'static str,
    german: &'static str,
}

#[derive(Serialize)]
struct TranslateResponse {
    table: &'static str,
    from: String,
    to: &'static str,
}

const fn table(name: LabelTableName) -> LabelTable {
    match name {
        LabelTableName::Source => SOURCE_OF_DRUG_INFORMATION,
        LabelTableName::Interval => INTERVAL_OF_DAILY_DOSE,
    }
}

/// Handle `medlog label`. Works offline.
pub fn handle(action: &LabelCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LabelCommands::List { table: name } => {
            let rows = table(*name)
                .pairs()
                .iter()
                .map(|&(english, german)| LabelRow { english, german })
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        LabelCommands::Translate { table: name, label } => {
            let table = table(*name);
            let to = table.translate(label)?;
            output(
                &TranslateResponse {
                    table: table.name(),
                    from: label.clone(),
                    to,
                },
                flags.format,
            )
        }
    }
}
