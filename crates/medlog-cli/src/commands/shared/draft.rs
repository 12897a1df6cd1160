//! Lay intake flags over an [`IntakeDraft`].

use anyhow::Context;
use medlog_core::enums::{ConsumedMedsToday, IntakeRegularOrAsNeeded, IntervalOfDailyDose};
use medlog_core::intake::{DrugRef, IntakeDraft};
use medlog_core::labels::{INTERVAL_OF_DAILY_DOSE, SOURCE_OF_DRUG_INFORMATION};

use crate::cli::subcommands::{IntakeDrugArgs, IntakeMode};

/// Overwrite the fields of `draft` that have a flag; the rest is kept.
/// Label arguments accept either language; the draft always holds the
/// English wire value.
pub fn apply_drug_args(
    mut draft: IntakeDraft,
    args: &IntakeDrugArgs,
) -> anyhow::Result<IntakeDraft> {
    let drug = match (&args.pzn, &args.custom_drug) {
        (Some(pzn), _) => Some(DrugRef::pzn(pzn)?),
        (None, Some(id)) => Some(DrugRef::custom(id)?),
        (None, None) => None,
    };
    if let Some(drug) = drug {
        if draft.drug.as_ref() != Some(&drug) {
            draft.drug_name = None;
        }
        draft.drug = Some(drug);
    }

    match &args.source {
        Some(label) if SOURCE_OF_DRUG_INFORMATION.to_german(label).is_ok() => {
            draft.source_of_drug_information = Some(label.clone());
        }
        Some(label) => {
            draft.source_of_drug_information =
                Some(SOURCE_OF_DRUG_INFORMATION.to_english(label)?.to_string());
        }
        None => {}
    }

    if let Some(raw) = &args.consumed_today {
        draft.consumed_meds_today = ConsumedMedsToday::parse(raw)?;
    }
    if let Some(start) = args.start {
        draft.intake_start_time_utc = Some(start);
    }
    if let Some(end) = args.end {
        draft.intake_end_time_utc = Some(end);
    }
    if let Some(doctor) = &args.doctor {
        draft.administered_by_doctor = Some(doctor.clone());
    }
    if let Some(mode) = args.mode {
        draft.regular_or_as_needed = Some(match mode {
            IntakeMode::Regular => IntakeRegularOrAsNeeded::Regular,
            IntakeMode::AsNeeded => IntakeRegularOrAsNeeded::AsNeeded,
        });
    }
    if let Some(dose) = args.dose_per_day {
        draft.dose_per_day = Some(dose);
    }
    if let Some(raw) = &args.interval {
        draft.regular_interval = Some(parse_interval(raw)?);
    }
    Ok(draft)
}

fn parse_interval(raw: &str) -> anyhow::Result<IntervalOfDailyDose> {
    if let Ok(interval) = IntervalOfDailyDose::parse(raw) {
        return Ok(interval);
    }
    let english = INTERVAL_OF_DAILY_DOSE
        .to_english(raw)
        .with_context(|| format!("invalid --interval '{raw}'"))?;
    Ok(IntervalOfDailyDose::parse(english)?)
}
