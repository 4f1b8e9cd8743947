//! DAM wire-format records
//!
//! Serde structs for the rows the DAM's search functions return, plus the
//! shared decoding helpers. Conversions into the host-facing model live
//! next to each record so the field-name quirks stay in one place.

mod collection;
mod resource;

pub use collection::CollectionRecord;
pub use resource::ResourceRecord;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::{debug, warn};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Decode an array response into records.
///
/// The DAM answers a zero-match search with a JSON error object instead of
/// an empty array; that is a normal outcome here, not a failure. An array
/// whose rows do not decode degrades to empty as well, with a warning.
pub(crate) fn records_from_value<T: DeserializeOwned>(value: Value, function: &str) -> Vec<T> {
    if !value.is_array() {
        debug!("{function}: non-array response, treating as zero matches");
        return Vec::new();
    }

    match serde_json::from_value(value) {
        Ok(records) => records,
        Err(err) => {
            warn!("{function}: discarding undecodable result rows: {err}");
            Vec::new()
        }
    }
}

/// Accept a field the DAM emits as either a JSON string or a number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// Parse the DAM's `YYYY-MM-DD HH:MM:SS` timestamps, date-only accepted.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}
