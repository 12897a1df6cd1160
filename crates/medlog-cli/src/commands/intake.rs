use anyhow::Context;
use medlog_api::ApiError;
use medlog_auth::AppState;
use medlog_core::intake::IntakeDraft;
use medlog_core::wizard::{InterviewWizard, WizardStep};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{IntakeAddArgs, IntakeCommands, IntakeSubmitArgs};
use crate::commands::shared::draft::apply_drug_args;
use crate::context::AppContext;
use crate::output::output;

/// Handle `medlog intake`.
pub async fn handle(
    action: &IntakeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IntakeCommands::Submit(args) => submit(args, ctx, flags).await,
        IntakeCommands::Add(args) => add(args, ctx, flags).await,
        IntakeCommands::List { study, interview } => {
            let intakes = ctx.client.list_intakes(study, interview).await?;
            output(&intakes, flags.format)
        }
    }
}

/// Walk the wizard with the given flags and post the confirmed interview.
///
/// The wizard stays in the drug store until the interview exists, so a run
/// that fails validation or cannot reach the backend is resumed next time.
async fn submit(
    args: &IntakeSubmitArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut wizard = load_wizard(args, &ctx.state).await;
    let confirmed = confirm(args, &mut wizard);
    ctx.state.drug.write().await.wizard = Some(wizard.clone());
    confirmed?;

    let (body, payloads) = wizard.finish()?;
    let submitted = ctx
        .client
        .submit_interview(&args.study, &args.event, &body, &payloads)
        .await
        .map_err(|error| with_recovery_hint(error, &args.study))?;
    output(&submitted, flags.format)
}

/// The unfinished wizard of an earlier run, unless `--fresh` was given.
async fn load_wizard(args: &IntakeSubmitArgs, state: &AppState) -> InterviewWizard {
    if args.fresh {
        return InterviewWizard::new();
    }
    match state.drug.read().await.wizard.clone() {
        Some(wizard) => {
            tracing::info!(step = wizard.step().as_str(), "resuming unfinished interview");
            wizard
        }
        None => InterviewWizard::new(),
    }
}

/// Fill `wizard` from the flags and advance it to the confirmation step.
///
/// Proband flags send a resumed wizard back to the first step; drug flags
/// are laid over the intake being edited.
fn confirm(args: &IntakeSubmitArgs, wizard: &mut InterviewWizard) -> anyhow::Result<()> {
    if args.proband.is_some() || args.no_meds || args.interview_number.is_some() {
        while wizard.step() != WizardStep::ProbandInfo {
            wizard.back();
        }
        if let Some(proband) = &args.proband {
            wizard.proband.proband_external_id.clone_from(proband);
        }
        if args.interview_number.is_some() {
            wizard.proband.interview_number = args.interview_number;
        }
        wizard.proband.proband_has_taken_meds = !args.no_meds;
    }
    if wizard.step() == WizardStep::ProbandInfo {
        wizard.advance()?;
    }
    if wizard.step() == WizardStep::DrugSelection {
        wizard.current = apply_drug_args(wizard.current.clone(), &args.drug)?;
        wizard.advance()?;
    }
    Ok(())
}

fn with_recovery_hint(error: ApiError, study: &str) -> anyhow::Error {
    let ApiError::IntakesIncomplete { interview_id, .. } = &error else {
        return error.into();
    };
    let hint = format!(
        "add the remaining intakes with `medlog intake add --study {study} --interview {interview_id}`"
    );
    anyhow::Error::new(error).context(hint)
}

async fn add(args: &IntakeAddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (interview, draft) = prepare_intake(args, &ctx.state).await?;
    let intake = ctx.client.submit_intake(&args.study, &interview, draft).await?;
    output(&intake, flags.format)
}

/// Resolve the target interview and lay the flags over the stored draft.
/// The result is stored again so a rejected intake can be corrected.
async fn prepare_intake(
    args: &IntakeAddArgs,
    state: &AppState,
) -> anyhow::Result<(String, IntakeDraft)> {
    let interview = match &args.interview {
        Some(id) => id.clone(),
        None => state
            .proband
            .read()
            .await
            .interview_id
            .clone()
            .context("no interview created yet; pass --interview")?,
    };
    let mut drug = state.drug.write().await;
    let draft = apply_drug_args(drug.draft.clone(), &args.drug)?;
    drug.draft = draft.clone();
    Ok((interview, draft))
}
