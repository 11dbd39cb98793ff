//! Chainability rules.
//!
//! Decides whether one itinerary may be flown directly after another. The
//! rules are checked in a fixed order and the first failure wins:
//!
//! 1. The layover lies inside the connection window (inclusive).
//! 2. The first itinerary lands where the second takes off.
//! 3. No flight of the second departs from an airport that any flight of
//!    the first departs from.
//! 4. The second does not end at an airport the first departs from,
//!    except the first itinerary's origin.
//!
//! Rules 3 and 4 are deliberately asymmetric: a round trip back to the
//! origin is allowed, landing on an earlier stopover is not.

use chrono::Duration;

use super::config::SearchConfig;
use crate::domain::{Airport, Itinerary};

/// Why a pair of itineraries cannot be chained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainRejection {
    /// Layover shorter than the minimum connection time
    #[error("connection of {} minutes is too short", .0.num_minutes())]
    ConnectionTooShort(Duration),

    /// Layover longer than the maximum connection time
    #[error("connection of {} minutes is too long", .0.num_minutes())]
    ConnectionTooLong(Duration),

    /// Arrival and departure airports differ
    #[error("arrives at {arrives} but next departs from {departs}")]
    NotAdjacent { arrives: Airport, departs: Airport },

    /// An airport would be departed from twice
    #[error("departs from {0} twice")]
    RepeatedDeparture(Airport),

    /// The chain would end at an earlier stopover
    #[error("ends at stopover {0}")]
    ReturnsToStopover(Airport),
}

/// Check whether `next` may be flown directly after `first`.
///
/// Returns the first rule that fails, in rule order.
pub fn check_chain(
    first: &Itinerary,
    next: &Itinerary,
    config: &SearchConfig,
) -> Result<(), ChainRejection> {
    let gap = next.departure().signed_duration_since(first.arrival());
    if gap < config.min_connection() {
        return Err(ChainRejection::ConnectionTooShort(gap));
    }
    if gap > config.max_connection() {
        return Err(ChainRejection::ConnectionTooLong(gap));
    }

    if first.destination() != next.source() {
        return Err(ChainRejection::NotAdjacent {
            arrives: first.destination().clone(),
            departs: next.source().clone(),
        });
    }

    for flight in next.flights() {
        if first.flights().iter().any(|f| f.source == flight.source) {
            return Err(ChainRejection::RepeatedDeparture(flight.source.clone()));
        }
    }

    let final_stop = next.destination();
    if first.flights()[1..].iter().any(|f| &f.source == final_stop) {
        return Err(ChainRejection::ReturnsToStopover(final_stop.clone()));
    }

    Ok(())
}

/// Returns true if `next` may be flown directly after `first`.
pub fn can_chain(first: &Itinerary, next: &Itinerary, config: &SearchConfig) -> bool {
    check_chain(first, next, config).is_ok()
}
