//! Intake drafts and the rules applied before submission.
//!
//! A draft is filled in over several wizard steps and turned into an
//! [`IntakeCreate`] payload exactly once. The payload always references
//! exactly one drug (PZN or custom drug) and carries dose-per-day and the
//! regular interval only for regular intakes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::IntakeCreate;
use crate::enums::{ConsumedMedsToday, IntakeRegularOrAsNeeded, IntervalOfDailyDose};
use crate::errors::CoreError;
use crate::labels::SOURCE_OF_DRUG_INFORMATION;

const PZN_LEN: usize = 8;

/// The drug an intake refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DrugRef {
    /// Pharmazentralnummer, normalised to 8 digits.
    Pzn(String),
    /// Id of a user-created custom drug.
    CustomDrug(String),
}

impl DrugRef {
    /// Reference a drug by PZN, normalising the input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the input is not a PZN.
    pub fn pzn(raw: &str) -> Result<Self, CoreError> {
        normalize_pzn(raw).map(Self::Pzn)
    }

    /// Reference a custom drug by id, normalised to the hyphenated
    /// lower-case UUID form.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `id` is blank or not a UUID.
    pub fn custom(id: &str) -> Result<Self, CoreError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CoreError::validation("custom drug id must not be empty"));
        }
        let uuid = uuid::Uuid::parse_str(id)
            .map_err(|_| CoreError::validation(format!("'{id}' is not a valid custom drug id")))?;
        Ok(Self::CustomDrug(uuid.hyphenated().to_string()))
    }
}

/// Normalise PZN input (`PZN-01234567`, `1234 567`, ...) to 8 digits.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] unless 2 to 8 digits remain after
/// stripping the `PZN` prefix, dashes and spaces.
pub fn normalize_pzn(raw: &str) -> Result<String, CoreError> {
    let upper = raw.trim().to_ascii_uppercase();
    let digits: String = upper
        .trim_start_matches("PZN")
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect();
    if digits.len() < 2 || digits.len() > PZN_LEN || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::validation(format!("'{raw}' is not a valid PZN")));
    }
    Ok(format!("{digits:0>width$}", width = PZN_LEN))
}

/// An intake being recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeDraft {
    pub drug: Option<DrugRef>,
    /// Name shown to the interviewer; not submitted.
    pub drug_name: Option<String>,
    /// English wire value of the information source.
    pub source_of_drug_information: Option<String>,
    pub intake_start_time_utc: Option<NaiveDate>,
    pub intake_end_time_utc: Option<NaiveDate>,
    pub administered_by_doctor: Option<String>,
    pub regular_or_as_needed: Option<IntakeRegularOrAsNeeded>,
    pub dose_per_day: Option<u32>,
    pub regular_interval: Option<IntervalOfDailyDose>,
    pub consumed_meds_today: ConsumedMedsToday,
}

impl IntakeDraft {
    /// Set the information source from its German label.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownLabel`] for labels outside the table.
    pub fn set_source_from_german(&mut self, german: &str) -> Result<(), CoreError> {
        let english = SOURCE_OF_DRUG_INFORMATION.to_english(german)?;
        self.source_of_drug_information = Some(english.to_string());
        Ok(())
    }

    /// Whether nothing has been entered yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Field-level problems that block submission. Empty when valid.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.drug.is_none() {
            errors.push("drug: select a drug or a custom drug".to_string());
        }
        match (self.intake_start_time_utc, self.intake_end_time_utc) {
            (None, _) => errors.push("intake_start_time_utc: required".to_string()),
            (Some(start), Some(end)) if end < start => {
                errors.push("intake_end_time_utc: must not be before the start".to_string());
            }
            _ => {}
        }
        if let Some(source) = &self.source_of_drug_information
            && SOURCE_OF_DRUG_INFORMATION.to_german(source).is_err()
        {
            errors.push(format!("source_of_drug_information: unknown value '{source}'"));
        }
        if self.regular_or_as_needed == Some(IntakeRegularOrAsNeeded::Regular)
            && self.regular_interval.is_none()
        {
            errors.push("regular_intervall_of_daily_dose: required for regular intake".to_string());
        }
        errors
    }

    /// Validate and convert the draft into the submission payload.
    ///
    /// Dose-per-day and the regular interval are cleared unless the intake
    /// is regular; `as_needed_dose_unit` is always sent empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] with every field error found.
    pub fn into_payload(self) -> Result<IntakeCreate, CoreError> {
        let errors = self.errors();
        let (Some(drug), Some(start), true) = (self.drug, self.intake_start_time_utc, errors.is_empty())
        else {
            return Err(CoreError::Validation(errors));
        };

        let (pharmazentralnummer, custom_drug_id) = match drug {
            DrugRef::Pzn(pzn) => (Some(pzn), None),
            DrugRef::CustomDrug(id) => (None, Some(id)),
        };

        let regular = self.regular_or_as_needed == Some(IntakeRegularOrAsNeeded::Regular);

        Ok(IntakeCreate {
            pharmazentralnummer,
            custom_drug_id,
            source_of_drug_information: self.source_of_drug_information,
            intake_start_time_utc: start,
            intake_end_time_utc: self.intake_end_time_utc,
            administered_by_doctor: self.administered_by_doctor,
            intake_regular_or_as_needed: self.regular_or_as_needed,
            dose_per_day: if regular { self.dose_per_day } else { None },
            regular_intervall_of_daily_dose: if regular { self.regular_interval } else { None },
            as_needed_dose_unit: None,
            consumed_meds_today: self.consumed_meds_today,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn regular_draft() -> IntakeDraft {
        IntakeDraft {
            drug: Some(DrugRef::pzn("PZN-1234567").unwrap()),
            intake_start_time_utc: Some(date(2024, 5, 1)),
            regular_or_as_needed: Some(IntakeRegularOrAsNeeded::Regular),
            dose_per_day: Some(2),
            regular_interval: Some(IntervalOfDailyDose::Daily),
            ..Default::default()
        }
    }

    #[test]
    fn normalizes_pzn_variants() {
        assert_eq!(normalize_pzn("PZN-88888888").unwrap(), "88888888");
        assert_eq!(normalize_pzn("pzn 1234 567").unwrap(), "01234567");
        assert_eq!(normalize_pzn("23").unwrap(), "00000023");
        assert!(normalize_pzn("123456789").is_err());
        assert!(normalize_pzn("12a4").is_err());
        assert!(normalize_pzn("PZN-").is_err());
    }

    #[test]
    fn regular_intake_keeps_dose_fields() {
        let payload = regular_draft().into_payload().unwrap();
        assert_eq!(payload.pharmazentralnummer.as_deref(), Some("01234567"));
        assert_eq!(payload.custom_drug_id, None);
        assert_eq!(payload.dose_per_day, Some(2));
        assert_eq!(payload.regular_intervall_of_daily_dose, Some(IntervalOfDailyDose::Daily));
        assert_eq!(payload.as_needed_dose_unit, None);
    }

    #[test]
    fn as_needed_intake_clears_dose_fields() {
        let draft = IntakeDraft {
            regular_or_as_needed: Some(IntakeRegularOrAsNeeded::AsNeeded),
            ..regular_draft()
        };
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.dose_per_day, None);
        assert_eq!(payload.regular_intervall_of_daily_dose, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["dose_per_day"].is_null());
        assert!(json["regular_intervall_of_daily_dose"].is_null());
        assert_eq!(json["intake_regular_or_as_needed"], "as needed");
    }

    #[test]
    fn unset_mode_also_clears_dose_fields() {
        let draft = IntakeDraft {
            regular_or_as_needed: None,
            ..regular_draft()
        };
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.dose_per_day, None);
        assert_eq!(payload.regular_intervall_of_daily_dose, None);
    }

    #[test]
    fn custom_drug_sets_only_custom_id() {
        let draft = IntakeDraft {
            drug: Some(DrugRef::custom("ab1b8b63-cc1f-4ac0-8d0d-5dffad322e0c").unwrap()),
            ..regular_draft()
        };
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.pharmazentralnummer, None);
        assert!(payload.custom_drug_id.is_some());
    }

    #[test]
    fn custom_drug_id_must_be_a_uuid() {
        assert_eq!(
            DrugRef::custom(" AB1B8B63-CC1F-4AC0-8D0D-5DFFAD322E0C ").unwrap(),
            DrugRef::CustomDrug("ab1b8b63-cc1f-4ac0-8d0d-5dffad322e0c".into())
        );
        assert!(DrugRef::custom("c-42").is_err());
        assert!(DrugRef::custom("ab1b8b63-cc1f-4ac0-8d0d").is_err());
        assert!(DrugRef::custom("  ").is_err());
    }

    #[test]
    fn collects_all_field_errors() {
        let draft = IntakeDraft {
            regular_or_as_needed: Some(IntakeRegularOrAsNeeded::Regular),
            source_of_drug_information: Some("Hearsay".into()),
            ..Default::default()
        };
        let CoreError::Validation(errors) = draft.into_payload().unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("drug"));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let draft = IntakeDraft {
            intake_end_time_utc: Some(date(2024, 4, 1)),
            ..regular_draft()
        };
        assert!(draft.into_payload().is_err());
    }

    #[test]
    fn german_source_label_is_stored_in_english() {
        let mut draft = IntakeDraft::default();
        draft.set_source_from_german("Beipackzettel").unwrap();
        assert_eq!(draft.source_of_drug_information.as_deref(), Some("Medication leaflet"));
        assert!(draft.set_source_from_german("Leaflet").is_err());
    }

    #[test]
    fn draft_roundtrips_through_json() {
        let draft = regular_draft();
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains(r#""kind":"pzn""#));
        let back: IntakeDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
