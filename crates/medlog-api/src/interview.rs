//! Interviews and their intakes.

use medlog_core::entities::{Intake, IntakeCreate, Interview, InterviewCreate};
use medlog_core::intake::IntakeDraft;
use serde::Serialize;

use crate::client::MedlogClient;
use crate::error::ApiError;
use crate::request::{ApiRequest, segment};

/// A confirmed interview and the intakes recorded for it.
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedInterview {
    pub interview: Interview,
    pub intakes: Vec<Intake>,
}

impl MedlogClient {
    /// `POST study/{study_id}/event/{event_id}/interview`.
    ///
    /// Remembers the event, the proband and the interview for follow-up
    /// calls.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn create_interview(
        &self,
        study_id: &str,
        event_id: &str,
        body: &InterviewCreate,
    ) -> Result<Interview, ApiError> {
        let path = format!(
            "study/{}/event/{}/interview",
            segment(study_id),
            segment(event_id)
        );
        let interview: Interview = self.fetch(ApiRequest::post_json(path, body)?).await?;
        self.state.studies.write().await.event = Some(event_id.to_string());
        {
            let mut proband = self.state.proband.write().await;
            proband.proband_id = Some(interview.proband_external_id.clone());
            proband.interview_id = Some(interview.id.clone());
        }
        tracing::info!(interview_id = %interview.id, proband = %interview.proband_external_id, "interview created");
        Ok(interview)
    }

    /// Create the interview, then post each intake of the confirmed wizard.
    ///
    /// The stored wizard is dropped once the interview exists.
    ///
    /// # Errors
    ///
    /// Errors of [`Self::create_interview`] are returned as is; a failed
    /// intake post becomes [`ApiError::IntakesIncomplete`] carrying the id of
    /// the interview that was created.
    pub async fn submit_interview(
        &self,
        study_id: &str,
        event_id: &str,
        body: &InterviewCreate,
        payloads: &[IntakeCreate],
    ) -> Result<SubmittedInterview, ApiError> {
        let interview = self.create_interview(study_id, event_id, body).await?;
        self.state.drug.write().await.wizard = None;

        let mut intakes = Vec::with_capacity(payloads.len());
        for payload in payloads {
            match self.post_intake(study_id, &interview.id, payload).await {
                Ok(intake) => intakes.push(intake),
                Err(source) => {
                    tracing::warn!(
                        interview_id = %interview.id,
                        posted = intakes.len(),
                        "intake post failed"
                    );
                    return Err(ApiError::IntakesIncomplete {
                        interview_id: interview.id,
                        posted: intakes.len(),
                        total: payloads.len(),
                        source: Box::new(source),
                    });
                }
            }
        }
        tracing::info!(interview_id = %interview.id, intakes = intakes.len(), "interview submitted");
        Ok(SubmittedInterview { interview, intakes })
    }

    /// `GET study/{study_id}/proband/{proband_id}/interview`, stored as the
    /// current proband's interviews.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn list_proband_interviews(
        &self,
        study_id: &str,
        proband_id: &str,
    ) -> Result<Vec<Interview>, ApiError> {
        let path = format!(
            "study/{}/proband/{}/interview",
            segment(study_id),
            segment(proband_id)
        );
        let interviews: Vec<Interview> = self.fetch(ApiRequest::get(path)).await?;
        let mut proband = self.state.proband.write().await;
        proband.proband_id = Some(proband_id.to_string());
        proband.interviews = Some(interviews.clone());
        Ok(interviews)
    }

    /// Validate `draft` and `POST study/{study_id}/interview/{interview_id}/intake`.
    ///
    /// The stored draft is discarded after a successful submit.
    ///
    /// # Errors
    ///
    /// [`ApiError::Core`] with the draft's field errors, else see
    /// [`Self::send_authed`].
    pub async fn submit_intake(
        &self,
        study_id: &str,
        interview_id: &str,
        draft: IntakeDraft,
    ) -> Result<Intake, ApiError> {
        let payload = draft.into_payload()?;
        let intake = self.post_intake(study_id, interview_id, &payload).await?;
        self.state.drug.write().await.draft = IntakeDraft::default();
        Ok(intake)
    }

    /// `POST study/{study_id}/interview/{interview_id}/intake` with an
    /// already validated payload, as produced by the interview wizard.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn post_intake(
        &self,
        study_id: &str,
        interview_id: &str,
        payload: &IntakeCreate,
    ) -> Result<Intake, ApiError> {
        let path = format!(
            "study/{}/interview/{}/intake",
            segment(study_id),
            segment(interview_id)
        );
        self.fetch(ApiRequest::post_json(path, payload)?).await
    }

    /// `GET study/{study_id}/interview/{interview_id}/intake`.
    ///
    /// # Errors
    ///
    /// See [`Self::send_authed`].
    pub async fn list_intakes(
        &self,
        study_id: &str,
        interview_id: &str,
    ) -> Result<Vec<Intake>, ApiError> {
        let path = format!(
            "study/{}/interview/{}/intake",
            segment(study_id),
            segment(interview_id)
        );
        self.fetch(ApiRequest::get(path)).await
    }
}
