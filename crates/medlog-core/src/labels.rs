//! German/English label tables for the interview UI.
//!
//! The backend speaks English enum values while interviewers see German
//! labels. Each table is an ordered list of `(english, german)` pairs and a
//! label maps to the label at the same position in the other column.
//! Lookups are linear; the tables are tiny.

use crate::errors::CoreError;

/// An ordered bijection between English and German labels.
#[derive(Debug, Clone, Copy)]
pub struct LabelTable {
    name: &'static str,
    pairs: &'static [(&'static str, &'static str)],
}

impl LabelTable {
    #[must_use]
    pub const fn new(name: &'static str, pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, pairs }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The `(english, german)` pairs in table order.
    #[must_use]
    pub const fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }

    pub fn english(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(english, _)| *english)
    }

    pub fn german(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(_, german)| *german)
    }

    /// Translate an English label to German.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownLabel`] if `english` is not in the table.
    pub fn to_german(&self, english: &str) -> Result<&'static str, CoreError> {
        self.pairs
            .iter()
            .find(|(en, _)| *en == english)
            .map(|(_, de)| *de)
            .ok_or_else(|| self.miss(english))
    }

    /// Translate a German label to English.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownLabel`] if `german` is not in the table.
    pub fn to_english(&self, german: &str) -> Result<&'static str, CoreError> {
        self.pairs
            .iter()
            .find(|(_, de)| *de == german)
            .map(|(en, _)| *en)
            .ok_or_else(|| self.miss(german))
    }

    /// Translate a label in either language to the other one.
    ///
    /// English is tried first.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownLabel`] if the label is in neither column.
    pub fn translate(&self, label: &str) -> Result<&'static str, CoreError> {
        self.to_german(label).or_else(|_| self.to_english(label))
    }

    fn miss(&self, label: &str) -> CoreError {
        CoreError::UnknownLabel {
            table: self.name,
            label: label.to_string(),
        }
    }
}

/// Where the interviewer got the drug information from.
pub const SOURCE_OF_DRUG_INFORMATION: LabelTable = LabelTable::new(
    "source of drug information",
    &[
        ("Study participant: verbal specification", "Probandenangabe"),
        ("Medication package: Scanned PZN", "Medikamentenpackung: PZN gescannt"),
        ("Medication package: Typed in PZN", "Medikamentenpackung: PZN getippt"),
        ("Medication package: Drug name", "Medikamentenpackung: Arzneimittelname"),
        ("Medication leaflet", "Beipackzettel"),
        ("Study participant: medication plan", "Medikamentenplan"),
        ("Study participant: Medication prescription", "Rezept"),
        ("Follow up via phone/message: Typed in PZN", "Nacherhebung: Tastatureingabe der PZN"),
        ("Follow up via phone/message: Medication name", "Nacherhebung: Arzneimittelname"),
    ],
);

/// Interval between doses of a regular intake.
///
/// The English column matches [`crate::enums::IntervalOfDailyDose`] wire values.
pub const INTERVAL_OF_DAILY_DOSE: LabelTable = LabelTable::new(
    "interval of daily dose",
    &[
        ("Unknown", "unbekannt"),
        ("Daily", "täglich"),
        ("every 2. day", "jeden 2. Tag"),
        ("every 3. day", "jeden 3. Tag"),
        ("every 4. day / twice a week", "jeden 4. Tag = 2x pro Woche"),
        ("intervals of one week or more", "Im Abstand von 1 Woche und mehr"),
    ],
);

/// All tables, for listing.
pub const ALL_TABLES: [LabelTable; 2] = [SOURCE_OF_DRUG_INFORMATION, INTERVAL_OF_DAILY_DOSE];
