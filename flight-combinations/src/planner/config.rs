//! Search configuration for the itinerary planner.

use chrono::Duration;

/// Error returned for an unusable search configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A bound is negative
    #[error("connection bounds must not be negative (got {0} minutes)")]
    NegativeBound(i64),

    /// The window is empty
    #[error("minimum connection ({min} minutes) exceeds maximum ({max} minutes)")]
    EmptyWindow { min: i64, max: i64 },

    /// A bound does not fit in a Duration
    #[error("connection bound of {0} minutes is too large")]
    BoundTooLarge(i64),
}

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum layover between arriving and departing (minutes).
    /// Tighter connections are rejected.
    pub min_connection_mins: i64,

    /// Maximum layover between arriving and departing (minutes).
    /// Longer connections are rejected.
    pub max_connection_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given connection window.
    pub fn new(min_connection_mins: i64, max_connection_mins: i64) -> Self {
        Self {
            min_connection_mins,
            max_connection_mins,
        }
    }

    /// Check that the connection window is non-empty, non-negative and
    /// representable as a Duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for bound in [self.min_connection_mins, self.max_connection_mins] {
            if bound < 0 {
                return Err(ConfigError::NegativeBound(bound));
            }
            if Duration::try_minutes(bound).is_none() {
                return Err(ConfigError::BoundTooLarge(bound));
            }
        }
        if self.min_connection_mins > self.max_connection_mins {
            return Err(ConfigError::EmptyWindow {
                min: self.min_connection_mins,
                max: self.max_connection_mins,
            });
        }
        Ok(())
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }

    /// Returns the maximum connection time as a Duration.
    pub fn max_connection(&self) -> Duration {
        Duration::minutes(self.max_connection_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 60,  // 1 hour
            max_connection_mins: 240, // 4 hours
        }
    }
}
