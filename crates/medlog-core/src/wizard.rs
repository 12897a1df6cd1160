//! The three-step interview wizard.
//!
//! ```text
//! proband_info → drug_selection → confirmation
//!              └──────────────────┘ (proband has taken no meds)
//! ```
//!
//! Every step edits the shared wizard state. `advance()` validates the
//! current step first; on failure the wizard stays put and sets `submitted`
//! so the UI can show field-level errors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{IntakeCreate, InterviewCreate};
use crate::errors::CoreError;
use crate::intake::IntakeDraft;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    ProbandInfo,
    DrugSelection,
    Confirmation,
}

impl WizardStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProbandInfo => "proband_info",
            Self::DrugSelection => "drug_selection",
            Self::Confirmation => "confirmation",
        }
    }
}

/// Proband data collected in the first step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbandInfo {
    pub proband_external_id: String,
    pub proband_has_taken_meds: bool,
    pub interview_number: Option<u32>,
}

/// Wizard state shared by all steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewWizard {
    step: WizardStep,
    submitted: bool,
    pub proband: ProbandInfo,
    /// Intake currently being edited in the drug selection step.
    pub current: IntakeDraft,
    intakes: Vec<IntakeCreate>,
}

impl InterviewWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Set after a failed `advance()`; cleared by the next successful one.
    #[must_use]
    pub const fn submitted(&self) -> bool {
        self.submitted
    }

    /// Intakes accepted so far.
    #[must_use]
    pub fn intakes(&self) -> &[IntakeCreate] {
        &self.intakes
    }

    /// Validate the current draft and add it to the interview.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] and sets `submitted` if the draft is
    /// invalid or the wizard is not in the drug selection step.
    pub fn add_intake(&mut self) -> Result<(), CoreError> {
        if self.step != WizardStep::DrugSelection {
            return Err(CoreError::validation(format!(
                "intakes can only be added in the drug selection step, not {}",
                self.step.as_str()
            )));
        }
        let draft = std::mem::take(&mut self.current);
        match draft.clone().into_payload() {
            Ok(payload) => {
                self.intakes.push(payload);
                self.submitted = false;
                Ok(())
            }
            Err(error) => {
                self.current = draft;
                self.submitted = true;
                Err(error)
            }
        }
    }

    /// Validate the current step and move to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] with the step's field errors; the
    /// wizard stays on the current step and `submitted` is set.
    pub fn advance(&mut self) -> Result<WizardStep, CoreError> {
        let next = match self.step {
            WizardStep::ProbandInfo => self.check_proband_info().map(|()| {
                if self.proband.proband_has_taken_meds {
                    WizardStep::DrugSelection
                } else {
                    WizardStep::Confirmation
                }
            }),
            WizardStep::DrugSelection => self.check_drug_selection(),
            WizardStep::Confirmation => Ok(WizardStep::Confirmation),
        };
        match next {
            Ok(step) => {
                self.step = step;
                self.submitted = false;
                Ok(step)
            }
            Err(error) => {
                self.submitted = true;
                Err(error)
            }
        }
    }

    /// Go back one step. Entered data is kept.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::ProbandInfo | WizardStep::DrugSelection => WizardStep::ProbandInfo,
            WizardStep::Confirmation if self.proband.proband_has_taken_meds => {
                WizardStep::DrugSelection
            }
            WizardStep::Confirmation => WizardStep::ProbandInfo,
        };
        self.submitted = false;
        self.step
    }

    /// Consume the confirmed wizard into the interview and intake bodies.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] unless the wizard reached the
    /// confirmation step.
    pub fn finish(self) -> Result<(InterviewCreate, Vec<IntakeCreate>), CoreError> {
        if self.step != WizardStep::Confirmation {
            return Err(CoreError::validation(format!(
                "interview is not confirmed yet (step: {})",
                self.step.as_str()
            )));
        }
        let interview = InterviewCreate {
            proband_external_id: self.proband.proband_external_id,
            proband_has_taken_meds: self.proband.proband_has_taken_meds,
            interview_number: self.proband.interview_number,
        };
        Ok((interview, self.intakes))
    }

    fn check_proband_info(&mut self) -> Result<(), CoreError> {
        let id = self.proband.proband_external_id.trim();
        if id.is_empty() {
            return Err(CoreError::validation("proband_external_id: required"));
        }
        self.proband.proband_external_id = id.to_string();
        Ok(())
    }

    fn check_drug_selection(&mut self) -> Result<WizardStep, CoreError> {
        if !self.current.is_blank() {
            self.add_intake()?;
        }
        if self.intakes.is_empty() {
            return Err(CoreError::validation(
                "intakes: at least one drug is required when the proband has taken meds",
            ));
        }
        Ok(WizardStep::Confirmation)
    }
}
