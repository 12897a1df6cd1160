//! # medlog-api
//!
//! Typed client for the MedLog REST API.
//!
//! Every authenticated call goes through [`MedlogClient::send_authed`],
//! which attaches the bearer token and recovers from a 401 with at most one
//! token refresh shared by all concurrent callers. Results are written back
//! into the [`medlog_auth::AppState`] the client was built with.

mod auth;
mod client;
mod drug;
mod error;
mod http;
mod interview;
mod page;
mod refresh;
mod request;
mod study;

pub use client::MedlogClient;
pub use error::ApiError;
pub use http::extract_detail;
pub use interview::SubmittedInterview;
pub use request::{ApiRequest, Body};
