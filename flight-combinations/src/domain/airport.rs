//! Airport code type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// An airport code.
///
/// Codes are opaque: they are compared by exact, case-sensitive equality
/// and never normalised beyond trimming surrounding whitespace. The only
/// requirement is that a code is not empty.
///
/// # Examples
///
/// ```
/// use flight_combinations::domain::Airport;
///
/// let prg = Airport::parse("PRG").unwrap();
/// assert_eq!(prg.as_str(), "PRG");
///
/// // Case matters
/// assert_ne!(Airport::parse("prg").unwrap(), prg);
///
/// // Empty codes are rejected
/// assert!(Airport::parse("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Airport(String);

impl Airport {
    /// Parse an airport code from a string, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidAirport {
                reason: "must not be empty",
            });
        }
        Ok(Airport(trimmed.to_string()))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.0)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
