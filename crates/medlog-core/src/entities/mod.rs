//! Entity structs for the MedLog REST API.
//!
//! Field names follow the backend's JSON. All structs derive `Serialize`,
//! `Deserialize` and `JsonSchema` so they roundtrip through the per-store
//! state files and can be schema-checked in tests.

mod drug;
mod event;
mod intake;
mod interview;
mod role;
mod study;
mod token;
mod user;

pub use drug::{DrugSearchHit, DrugSearchPage};
pub use event::{Event, EventCreate};
pub use intake::{Intake, IntakeCreate};
pub use interview::{Interview, InterviewCreate};
pub use role::Role;
pub use study::{Study, StudyCreate, StudyPermission};
pub use token::{AccessToken, TokenPair};
pub use user::User;
