//! Time utilities

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a datetime string in ISO 8601 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are reduced to their UTC date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(s).map(|dt| dt.date_naive()))
}

/// Whole days between two dates (negative when `to` precedes `from`)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Serde helper accepting `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}

/// Lenient optional timestamp: malformed values become `None`
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_datetime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(parse_date("2025-05-01"), Some(expected));
        assert_eq!(parse_date("2025-05-01T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_date("2025-05-01T22:30:00-03:00"), NaiveDate::from_ymd_opt(2025, 5, 2));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_days_between() {
        let a = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
        assert_eq!(days_between(a, b), 6);
        assert_eq!(days_between(b, a), -6);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15T12:00:00Z");
        assert!(dt.is_some());

        let invalid = parse_datetime("not a date");
        assert!(invalid.is_none());
    }
}
