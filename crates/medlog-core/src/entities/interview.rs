use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One data-collection session with a proband at an event.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Interview {
    pub id: String,
    pub event_id: String,
    pub proband_external_id: String,
    pub proband_has_taken_meds: bool,
    #[serde(default)]
    pub interview_number: Option<u32>,
    #[serde(default, with = "crate::timestamp::option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub interview_start_time_utc: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::timestamp::option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub interview_end_time_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub interviewer_user_id: Option<String>,
}

/// Body of `POST /study/{study_id}/event/{event_id}/interview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InterviewCreate {
    pub proband_external_id: String,
    pub proband_has_taken_meds: bool,
    pub interview_number: Option<u32>,
}
