//! Event records as they appear in the events dataset.
//!
//! Records are produced by the site's fetch pipeline and are read-only here.
//! Only `event_date` carries meaning for classification; everything else is
//! display data.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::UNKNOWN_DATE;

fn unknown_date() -> String {
    UNKNOWN_DATE.to_string()
}

/// `null` reads as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any non-string date (null, number, object) reads as `"unknown"`.
fn lenient_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(unknown_date()),
    }
}

/// One calendar/news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// `YYYY-MM-DD`, or `"unknown"`. Kept verbatim; see [`EventRecord::date`].
    #[serde(default = "unknown_date", deserialize_with = "lenient_date")]
    pub event_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Day the item was discovered by the fetch pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_date: Option<String>,
}

/// The calendar day an event claims to happen on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDate {
    On(NaiveDate),
    /// `"unknown"` or anything that is not a strict `YYYY-MM-DD` value
    Unknown,
}

impl EventRecord {
    /// Interpret `event_date`. Malformed values are treated as unknown.
    pub fn date(&self) -> EventDate {
        parse_iso_date(&self.event_date).map_or(EventDate::Unknown, EventDate::On)
    }

    /// Category key used for grouping and filtering.
    pub fn category_key(&self) -> String {
        self.category.to_lowercase()
    }
}

/// Parse a strict `YYYY-MM-DD` string (zero-padded, four-digit year).
///
/// chrono alone accepts unpadded fields such as `2025-1-5`; those would not
/// match dataset keys, so they are rejected here.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a date as a dataset key / archive path segment.
pub fn iso_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
