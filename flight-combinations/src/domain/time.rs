//! Flight timestamps.
//!
//! Flight times arrive as `YYYY-MM-DDTHH:MM:SS` strings without any
//! timezone. They are treated as naive local instants, and differences
//! between them are computed directly.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

use serde::{Serialize, Serializer};

/// The accepted timestamp format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: String,
}

/// A naive timestamp with second resolution.
///
/// # Examples
///
/// ```
/// use flight_combinations::domain::FlightTime;
///
/// let dep = FlightTime::parse("2017-02-11T06:25:00").unwrap();
/// let arr = FlightTime::parse("2017-02-11T07:25:00").unwrap();
/// assert_eq!(arr.signed_duration_since(dep), chrono::Duration::hours(1));
/// assert_eq!(dep.to_string(), "2017-02-11T06:25:00");
///
/// assert!(FlightTime::parse("2017-02-11 06:25").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightTime(NaiveDateTime);

impl FlightTime {
    /// Wrap an existing date-time.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Parse a timestamp in `YYYY-MM-DDTHH:MM:SS` format.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|e| TimeError {
                reason: format!("{e} (expected YYYY-MM-DDTHH:MM:SS)"),
            })
    }

    /// Returns the underlying date-time.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightTime({self})")
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for FlightTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse returns the same instant
        #[test]
        fn display_roundtrip(
            y in 1970i32..2100,
            mo in 1u32..=12,
            d in 1u32..=28,
            h in 0u32..24,
            mi in 0u32..60,
            s in 0u32..60,
        ) {
            let dt = chrono::NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap();
            let time = FlightTime::new(dt);
            prop_assert_eq!(FlightTime::parse(&time.to_string()).unwrap(), time);
        }
    }
}
