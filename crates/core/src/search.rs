//! Filter helpers for the paginated listings.
//!
//! Free-text filters are substring matches, date filters cover one whole UTC
//! calendar day. These helpers turn raw request values into the bind values
//! the store pushes into its `WHERE` clause.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Text filters
// ---------------------------------------------------------------------------

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Treat empty filter values as absent. Other values are used verbatim.
pub fn text_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Treat a zero (or negative) id filter as absent.
pub fn id_filter(value: Option<DbId>) -> Option<DbId> {
    value.filter(|id| *id > 0)
}

/// Build a `LIKE` pattern matching `value` anywhere in the column.
///
/// `%`, `_` and the escape character itself are escaped so user input is
/// matched literally.
pub fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Date filters
// ---------------------------------------------------------------------------

/// Half-open `[start, end)` bounds of a UTC calendar day.
///
/// The end is `None` for the last representable date, whose day runs to the
/// end of time.
pub fn day_bounds(day: NaiveDate) -> (Timestamp, Option<Timestamp>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = day
        .checked_add_days(Days::new(1))
        .map(|next| next.and_time(NaiveTime::MIN).and_utc());
    (start, end)
}

/// Parse a day filter: `YYYY-MM-DD`, or an RFC 3339 timestamp whose UTC date
/// is used. Empty input is absent.
pub fn parse_day(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<NaiveDate>() {
        Ok(day) => Ok(Some(day)),
        Err(date_err) => DateTime::parse_from_rfc3339(value)
            .map(|ts| Some(ts.with_timezone(&Utc).date_naive()))
            .map_err(|_| date_err),
    }
}

/// `deserialize_with` adapter for optional day filters.
///
/// Missing, `null` and empty-string values all become `None`. Pair it with
/// `#[serde(default)]` so an absent field deserializes too.
pub fn deserialize_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_day(&raw).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
