//! Calendar dates on the wire.
//!
//! Dates are always written as `YYYY-MM-DD`. On input an RFC 3339 timestamp
//! is accepted too and truncated to its calendar date in the given offset.

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer};

const WIRE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_wire_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, WIRE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_wire_date(&s).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid date `{}`, expected YYYY-MM-DD or an RFC 3339 timestamp",
            s
        ))
    })
}

pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize")] NaiveDate);

    let wrapped = Option::<Wrapper>::deserialize(deserializer)?;
    Ok(wrapped.map(|Wrapper(date)| date))
}
