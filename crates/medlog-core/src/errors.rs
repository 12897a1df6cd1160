//! Cross-cutting error types for the MedLog client.
//!
//! Transport and auth errors live in `medlog-api` and `medlog-auth`; this
//! module only covers failures of the pure rules in this crate.

use thiserror::Error;

/// Errors raised by the pure rules in `medlog-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A label was not found in either column of a translation table.
    #[error("unknown {table} label: '{label}'")]
    UnknownLabel { table: &'static str, label: String },

    /// A wire value does not match any variant of a backend enum.
    #[error("invalid {field} '{value}'")]
    InvalidValue { field: &'static str, value: String },

    /// A draft or form failed local validation.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl CoreError {
    /// Build a [`CoreError::Validation`] from a single message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }
}
