//! Calendar dates as they arrive from the REST layer.
//!
//! Dates may be plain `YYYY-MM-DD` or full timestamps. Only the calendar
//! day matters here, so timestamps are reduced to their UTC date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses a calendar date from `YYYY-MM-DD`, RFC 3339, or a naive ISO timestamp.
#[must_use]
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Serde adapter for a required calendar date.
pub mod flexible {
    use super::{Deserialize, Deserializer, NaiveDate, parse_calendar_date};
    use serde::Serializer;
    use serde::de::Error;

    /// Serializes as `YYYY-MM-DD`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    /// Deserializes from any format accepted by [`parse_calendar_date`].
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}

/// Serde adapter for an optional calendar date. Use with `#[serde(default)]`.
pub mod flexible_option {
    use super::{Deserialize, Deserializer, NaiveDate, parse_calendar_date};
    use serde::Serializer;
    use serde::de::Error;

    /// Serializes as `YYYY-MM-DD` or `null`.
    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `null`, an empty string, or any accepted date format.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_calendar_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}"))),
        }
    }
}
