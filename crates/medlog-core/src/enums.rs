//! Backend enums and their wire values.
//!
//! Each enum serializes to exactly the string the MedLog API expects. The
//! German UI labels for some of these live in [`crate::labels`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

macro_rules! wire_enum_impls {
    ($ty:ident, $field:literal) => {
        impl $ty {
            /// Parse a wire value (exact match).
            ///
            /// # Errors
            ///
            /// Returns [`CoreError::InvalidValue`] if `raw` is not a wire value
            /// of this enum.
            pub fn parse(raw: &str) -> Result<Self, CoreError> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == raw)
                    .ok_or_else(|| CoreError::InvalidValue {
                        field: $field,
                        value: raw.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// IntakeRegularOrAsNeeded
// ---------------------------------------------------------------------------

/// Whether a drug is taken on a regular schedule or only when needed.
///
/// Dose-per-day and the regular interval only apply to [`Self::Regular`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum IntakeRegularOrAsNeeded {
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "as needed")]
    AsNeeded,
}

impl IntakeRegularOrAsNeeded {
    pub const ALL: [Self; 2] = [Self::Regular, Self::AsNeeded];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::AsNeeded => "as needed",
        }
    }
}

wire_enum_impls!(IntakeRegularOrAsNeeded, "intake_regular_or_as_needed");

// ---------------------------------------------------------------------------
// IntervalOfDailyDose
// ---------------------------------------------------------------------------

/// Interval between doses for regular intakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum IntervalOfDailyDose {
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "Daily")]
    Daily,
    #[serde(rename = "every 2. day")]
    EverySecondDay,
    #[serde(rename = "every 3. day")]
    EveryThirdDay,
    #[serde(rename = "every 4. day / twice a week")]
    EveryFourthDay,
    #[serde(rename = "intervals of one week or more")]
    OneWeekOrMore,
}

impl IntervalOfDailyDose {
    pub const ALL: [Self; 6] = [
        Self::Unknown,
        Self::Daily,
        Self::EverySecondDay,
        Self::EveryThirdDay,
        Self::EveryFourthDay,
        Self::OneWeekOrMore,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Daily => "Daily",
            Self::EverySecondDay => "every 2. day",
            Self::EveryThirdDay => "every 3. day",
            Self::EveryFourthDay => "every 4. day / twice a week",
            Self::OneWeekOrMore => "intervals of one week or more",
        }
    }
}

wire_enum_impls!(IntervalOfDailyDose, "regular_intervall_of_daily_dose");

// ---------------------------------------------------------------------------
// ConsumedMedsToday
// ---------------------------------------------------------------------------

/// Answer to "did the proband take this drug today?".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ConsumedMedsToday {
    #[default]
    Yes,
    No,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl ConsumedMedsToday {
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::Unknown];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unknown => "UNKNOWN",
        }
    }
}

wire_enum_impls!(ConsumedMedsToday, "consumed_meds_today");

// ---------------------------------------------------------------------------
// FieldBucket
// ---------------------------------------------------------------------------

/// The four attribute groups of a drug field-definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldBucket {
    /// Plain single-valued attributes.
    Attrs,
    /// Single-valued attributes referencing a list of values.
    AttrsRef,
    /// Multi-valued attributes.
    AttrsMulti,
    /// Multi-valued attributes referencing a list of values.
    AttrsMultiRef,
}

impl FieldBucket {
    pub const ALL: [Self; 4] = [Self::Attrs, Self::AttrsRef, Self::AttrsMulti, Self::AttrsMultiRef];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attrs => "attrs",
            Self::AttrsRef => "attrs_ref",
            Self::AttrsMulti => "attrs_multi",
            Self::AttrsMultiRef => "attrs_multi_ref",
        }
    }

    /// Whether values in this bucket are lists.
    #[must_use]
    pub const fn is_multi(self) -> bool {
        matches!(self, Self::AttrsMulti | Self::AttrsMultiRef)
    }
}

wire_enum_impls!(FieldBucket, "field bucket");

// ---------------------------------------------------------------------------
// FieldPurpose
// ---------------------------------------------------------------------------

/// What a set of drug fields is being selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldPurpose {
    /// Columns shown in a drug search result list.
    SearchResult,
    /// Inputs of the custom-drug form.
    DynamicForm,
}

impl FieldPurpose {
    pub const ALL: [Self; 2] = [Self::SearchResult, Self::DynamicForm];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchResult => "search_result",
            Self::DynamicForm => "dynamic_form",
        }
    }
}

wire_enum_impls!(FieldPurpose, "field purpose");

// ---------------------------------------------------------------------------
// FieldValueType
// ---------------------------------------------------------------------------

/// Value type of a drug attribute, as reported by the field definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldValueType {
    #[default]
    Str,
    Int,
    Float,
    Bool,
    Datetime,
    Date,
    #[serde(other)]
    Other,
}

impl FieldValueType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Bool => "BOOL",
            Self::Datetime => "DATETIME",
            Self::Date => "DATE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for FieldValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
