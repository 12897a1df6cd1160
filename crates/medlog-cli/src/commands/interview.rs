use medlog_core::entities::InterviewCreate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InterviewCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `medlog interview`.
pub async fn handle(
    action: &InterviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InterviewCommands::Create(args) => {
            let proband = args.proband.trim();
            if proband.is_empty() {
                anyhow::bail!("interview create: --proband must not be empty");
            }
            let body = InterviewCreate {
                proband_external_id: proband.to_string(),
                proband_has_taken_meds: !args.no_meds,
                interview_number: args.interview_number,
            };
            let interview = ctx.client.create_interview(&args.study, &args.event, &body).await?;
            output(&interview, flags.format)
        }
        InterviewCommands::List { study, proband } => {
            let interviews = ctx.client.list_proband_interviews(study, proband).await?;
            output(&interviews, flags.format)
        }
    }
}
