//! # medlog-core
//!
//! Core types and pure rules shared by all MedLog client crates.
//!
//! This crate provides:
//! - Entity structs mirroring the MedLog REST API (users, studies, events,
//!   interviews, intakes, drug search hits)
//! - Backend enums with their wire values
//! - German/English label tables for the interview UI
//! - The drug field-definition categorizer
//! - The intake draft and the interview wizard
//! - Cross-cutting error types

pub mod display;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod field_def;
pub mod intake;
pub mod labels;
pub mod timestamp;
pub mod wizard;

pub use errors::CoreError;
