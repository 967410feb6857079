//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from a zone-less ISO-8601 string.
    ///
    /// The scoring backend reports `fecha_*` fields as naive local ISO
    /// strings without an offset; they are taken as UTC.
    pub fn parse_naive_iso(raw: &str) -> Result<Self, chrono::ParseError> {
        let naive: NaiveDateTime = raw.parse()?;
        Ok(Self(naive.and_utc()))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_naive_iso_from_backend() {
        let ts = Timestamp::parse_naive_iso("2026-03-14T09:26:53.589793").unwrap();
        assert_eq!(ts.as_datetime().timezone(), Utc);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Timestamp::parse_naive_iso("not a date").is_err());
    }

    #[test]
    fn ordering_follows_the_instant() {
        let earlier = Timestamp::parse_naive_iso("2026-01-01T00:00:00").unwrap();
        let later = Timestamp::parse_naive_iso("2026-06-01T00:00:00").unwrap();
        assert!(earlier < later);
    }
}
