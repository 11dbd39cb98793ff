//! Flight record type.
//!
//! A `Flight` is one direct leg between two airports, as read from a
//! single input row. It is never mutated after construction and is shared
//! between itineraries through `Arc`.

use super::{Airport, FlightTime};

/// A single flight leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Departure airport
    pub source: Airport,
    /// Arrival airport
    pub destination: Airport,
    /// Local departure time
    pub departure: FlightTime,
    /// Local arrival time
    pub arrival: FlightTime,
    /// Display identifier, never used for matching
    pub flight_number: String,
    /// Ticket price
    pub price: u64,
    /// Maximum number of checked bags on this leg
    pub bags_allowed: u32,
    /// Price of each checked bag on this leg
    pub bag_price: u64,
}
