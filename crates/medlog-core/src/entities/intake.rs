use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ConsumedMedsToday, IntakeRegularOrAsNeeded, IntervalOfDailyDose};

/// Body of `POST /study/{study_id}/interview/{interview_id}/intake`.
///
/// Build it through [`crate::intake::IntakeDraft::into_payload`], which
/// enforces the drug-reference and regular/as-needed rules. `None` fields
/// serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntakeCreate {
    pub pharmazentralnummer: Option<String>,
    pub custom_drug_id: Option<String>,
    pub source_of_drug_information: Option<String>,
    pub intake_start_time_utc: NaiveDate,
    pub intake_end_time_utc: Option<NaiveDate>,
    pub administered_by_doctor: Option<String>,
    pub intake_regular_or_as_needed: Option<IntakeRegularOrAsNeeded>,
    pub dose_per_day: Option<u32>,
    pub regular_intervall_of_daily_dose: Option<IntervalOfDailyDose>,
    pub as_needed_dose_unit: Option<u32>,
    pub consumed_meds_today: ConsumedMedsToday,
}

/// A recorded intake as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Intake {
    pub id: String,
    pub interview_id: String,
    #[serde(flatten)]
    pub record: IntakeCreate,
}
