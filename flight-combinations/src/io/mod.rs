//! CSV input and itinerary output.
//!
//! The loader turns input rows into [`Flight`](crate::domain::Flight)
//! records; the encoder turns search results back into rows.

mod encoder;
mod error;
mod loader;

pub use encoder::{
    ITINERARY_FIELDS, ItineraryRow, OutputFormat, UNAVAILABLE, write_csv, write_itineraries,
    write_json,
};
pub use error::{EncodeError, LoadError};
pub use loader::{FLIGHT_FIELDS, load_flights};
