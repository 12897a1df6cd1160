use medlog_core::entities::{Study, StudyCreate};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudyCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StudyRow {
    id: String,
    name: String,
    label: String,
    deactivated: bool,
    can_interview: bool,
}

impl From<&Study> for StudyRow {
    fn from(study: &Study) -> Self {
        Self {
            id: study.id.clone(),
            name: study.name.clone(),
            label: study.label(),
            deactivated: study.deactivated,
            can_interview: study.can_interview(),
        }
    }
}

/// Handle `medlog study`.
pub async fn handle(
    action: &StudyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudyCommands::List => {
            let studies = ctx.client.list_studies().await?;
            let mut rows = studies.iter().map(StudyRow::from).collect::<Vec<_>>();
            if let Some(limit) = flags.limit {
                rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
            }
            output(&rows, flags.format)
        }
        StudyCommands::Create { name, display_name } => {
            let study = ctx
                .client
                .create_study(&StudyCreate::new(name.trim(), display_name.clone()))
                .await?;
            output(&StudyRow::from(&study), flags.format)
        }
        StudyCommands::Get { id } => {
            let study = ctx.client.get_study(id).await?;
            output(&study, flags.format)
        }
    }
}
