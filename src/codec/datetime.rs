//! RFC 3339 timestamps
//!
//! Whole-second instants are written without a fractional part; anything with
//! sub-second precision is written with milliseconds. The offset a timestamp
//! arrived with is kept, and a zero offset is written as `Z`.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};

/// Timestamp as carried by wire models
pub type Timestamp = DateTime<FixedOffset>;

/// Format a timestamp for the wire.
pub fn format<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if dt.timestamp_subsec_nanos() == 0 {
        dt.to_rfc3339_opts(SecondsFormat::Secs, true)
    } else {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Parse an RFC 3339 timestamp, keeping its offset.
pub fn parse(input: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(input)
}

/// Serde helpers for `Option<Timestamp>` fields
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => super::parse(&s).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "super::option"
        )]
        at: Option<Timestamp>,
    }

    #[test]
    fn test_whole_seconds_have_no_fraction() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format(&dt), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_sub_second_uses_millis() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(format(&dt), "2024-01-01T00:00:00.123Z");
    }

    #[test]
    fn test_sub_millisecond_truncates() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(500);
        assert_eq!(format(&dt), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_keeps_offset() {
        let dt = parse("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(format(&dt), "2024-01-01T02:00:00+02:00");
    }

    #[test]
    fn test_zero_offset_written_as_z() {
        let dt = parse("2024-01-01T00:00:00+00:00").unwrap();
        assert_eq!(format(&dt), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_err());
    }

    #[test]
    fn test_option_field() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":"2024-03-05T10:20:30.5Z"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"at":"2024-03-05T10:20:30.500Z"}"#
        );

        let empty: Stamped = serde_json::from_str("{}").unwrap();
        assert!(empty.at.is_none());
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
    }
}
