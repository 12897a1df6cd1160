mod auth;
mod drug;
mod event;
mod intake;
mod interview;
mod label;
mod study;
mod user;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use drug::{DrugCommands, DrugFieldsArgs, DrugSearchArgs, PurposeArg};
pub use event::EventCommands;
pub use intake::{IntakeAddArgs, IntakeCommands, IntakeDrugArgs, IntakeMode, IntakeSubmitArgs};
pub use interview::InterviewCommands;
pub use label::{LabelCommands, LabelTableName};
pub use study::StudyCommands;
pub use user::UserCommands;
