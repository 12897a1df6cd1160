//! Lenient UTC timestamp (de)serialization.
//!
//! The backend keeps naive UTC timestamps and emits them without an offset
//! (`2024-05-02T09:30:00.123456`). RFC 3339 strings with an offset are
//! accepted as well and normalised to UTC. Serialization always writes
//! RFC 3339.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse a backend timestamp, with or without an offset.
#[must_use]
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}

/// Same as the parent module, for `Option<DateTime<Utc>>` fields.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|raw| {
            super::parse(&raw)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::parse;

    #[test]
    fn parses_naive_backend_timestamp() {
        let dt = parse("2024-05-02T09:30:00.123456").expect("should parse");
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 9);
    }

    #[test]
    fn parses_naive_timestamp_without_fraction() {
        let dt = parse("2024-05-02T09:30:00").expect("should parse");
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn normalises_offset_to_utc() {
        let dt = parse("2024-05-02T11:30:00+02:00").expect("should parse");
        assert_eq!(dt.hour(), 9);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("yesterday").is_none());
    }
}
