pub mod auth;
pub mod dispatch;
pub mod drug;
pub mod event;
pub mod intake;
pub mod interview;
pub mod label;
pub mod route;
pub mod shared;
pub mod study;
pub mod user;
