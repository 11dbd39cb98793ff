//! Domain types for flight combinations.
//!
//! This module contains the core data model: validated flight records and
//! the itineraries built by chaining them. Types enforce their invariants
//! at construction time, so code that receives them can trust them.

mod airport;
mod error;
mod flight;
mod itinerary;
mod time;

pub use airport::{Airport, InvalidAirport};
pub use error::DomainError;
pub use flight::Flight;
pub use itinerary::Itinerary;
pub use time::{FlightTime, TIMESTAMP_FORMAT, TimeError};
