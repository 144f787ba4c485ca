//! The API's date-time wire format.
//!
//! Every timestamp Airship accepts in these payloads (opt-in times, custom
//! event occurrence) is written as `YYYY-MM-DDTHH:MM:SS`: UTC, whole
//! seconds, no offset suffix.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

/// `strftime` pattern of the wire format.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors that can occur when parsing a wire date-time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date-time {input:?}: {source}")]
pub struct WireDateTimeError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

/// Formatting, parsing and serde helpers for the wire format.
///
/// Use with `#[serde(with = "airship_core::wire_datetime")]` on a
/// `DateTime<Utc>` field.
pub mod wire_datetime {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::WireDateTimeError;

    /// Render a timestamp in the wire format. Sub-second precision is
    /// truncated.
    #[must_use]
    pub fn format(at: &DateTime<Utc>) -> String {
        at.format(super::WIRE_FORMAT).to_string()
    }

    /// Parse a wire timestamp.
    ///
    /// Offset-less input is read as UTC. RFC 3339 input carrying an offset
    /// is converted to UTC. Fractional seconds are dropped either way.
    ///
    /// # Errors
    ///
    /// Returns [`WireDateTimeError`] if the input matches neither form.
    pub fn parse(input: &str) -> Result<DateTime<Utc>, WireDateTimeError> {
        super::parse_utc(input)
    }

    /// Serialize a `DateTime<Utc>` in the wire format.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&at.format(super::WIRE_FORMAT))
    }

    /// Deserialize a `DateTime<Utc>` from the wire format.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a string or cannot be parsed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn parse_utc(input: &str) -> Result<DateTime<Utc>, WireDateTimeError> {
    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f");
    let parsed = match naive {
        Ok(naive) => naive.and_utc(),
        Err(naive_err) => DateTime::parse_from_rfc3339(input)
            .map(|at| at.with_timezone(&Utc))
            .map_err(|_| WireDateTimeError {
                input: input.to_owned(),
                source: naive_err,
            })?,
    };
    Ok(parsed.trunc_subsecs(0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Timelike};
    use serde::{Deserialize, Serialize};

    use super::*;

    #[test]
    fn test_format_is_second_precision_without_offset() {
        let at = Utc.with_ymd_and_hms(2018, 11, 29, 10, 34, 22).unwrap();
        let at = at.with_nanosecond(987_654_321).unwrap();
        assert_eq!(wire_datetime::format(&at), "2018-11-29T10:34:22");
    }

    #[test]
    fn test_format_normalizes_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2015, 5, 2, 4, 31, 22).unwrap();
        assert_eq!(
            wire_datetime::format(&local.with_timezone(&Utc)),
            "2015-05-02T02:31:22"
        );
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let at = wire_datetime::parse("2018-11-29T12:45:10").unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2018, 11, 29, 12, 45, 10).unwrap());
    }

    #[test]
    fn test_parse_truncates_fraction() {
        let at = wire_datetime::parse("2018-11-29T12:45:10.750").unwrap();
        assert_eq!(at.nanosecond(), 0);
        assert_eq!(wire_datetime::format(&at), "2018-11-29T12:45:10");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let at = wire_datetime::parse("2015-05-01T21:31:22-05:00").unwrap();
        assert_eq!(wire_datetime::format(&at), "2015-05-02T02:31:22");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = wire_datetime::parse("29/11/2018").unwrap_err();
        assert!(err.to_string().contains("29/11/2018"));
    }

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "wire_datetime")]
        at: DateTime<Utc>,
    }

    #[test]
    fn test_serde_helpers() {
        let stamped = Stamped {
            at: Utc.with_ymd_and_hms(2015, 5, 2, 2, 31, 22).unwrap(),
        };
        let json = serde_json::to_string(&stamped).unwrap();
        assert_eq!(json, r#"{"at":"2015-05-02T02:31:22"}"#);

        let parsed: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.at, stamped.at);
    }
}
