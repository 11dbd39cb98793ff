//! Domain error types.
//!
//! These errors represent validation failures when building itineraries
//! by hand. They are distinct from input parsing and I/O errors.

use super::Airport;

/// Domain-level errors for itinerary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Consecutive flights don't share an airport
    #[error("flights do not connect: arrival at {0} but next departure from {1}")]
    FlightsNotConnected(Airport, Airport),

    /// Itinerary has no flights
    #[error("itinerary must have at least one flight")]
    EmptyItinerary,
}
