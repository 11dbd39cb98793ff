//! Itinerary output.
//!
//! Writes itineraries as CSV (the default) or as a JSON array. Both share
//! the same row shape. In CSV an unavailable bag price is written as `-`;
//! in JSON it is `null`.

use std::io::Write;

use serde::Serialize;

use super::error::EncodeError;
use crate::domain::{Airport, FlightTime, Itinerary};

/// Output column names, in order.
pub const ITINERARY_FIELDS: [&str; 10] = [
    "source",
    "destination",
    "departure",
    "arrival",
    "transfers_count",
    "flight_numbers_chain",
    "bags_allowed",
    "price",
    "price_with_1_bag",
    "price_with_2_bags",
];

/// Placeholder for a bag price the itinerary cannot offer.
pub const UNAVAILABLE: &str = "-";

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated rows with a header
    #[default]
    Csv,
    /// A JSON array of objects
    Json,
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryRow {
    pub source: Airport,
    pub destination: Airport,
    pub departure: FlightTime,
    pub arrival: FlightTime,
    pub transfers_count: usize,
    pub flight_numbers_chain: String,
    pub flight_numbers: Vec<String>,
    pub bags_allowed: u32,
    pub price: u64,
    pub price_with_1_bag: Option<u64>,
    pub price_with_2_bags: Option<u64>,
}

impl ItineraryRow {
    /// Derive the row for an itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            source: itinerary.source().clone(),
            destination: itinerary.destination().clone(),
            departure: itinerary.departure(),
            arrival: itinerary.arrival(),
            transfers_count: itinerary.transfer_count(),
            flight_numbers_chain: itinerary.flight_numbers_chain(),
            flight_numbers: itinerary.flight_numbers().map(str::to_string).collect(),
            bags_allowed: itinerary.bags_allowed(),
            price: itinerary.price(),
            price_with_1_bag: itinerary.price_with_bags(1),
            price_with_2_bags: itinerary.price_with_bags(2),
        }
    }

    /// Returns the CSV fields in [`ITINERARY_FIELDS`] order.
    pub fn to_csv_record(&self) -> [String; 10] {
        let bag_price = |price: Option<u64>| match price {
            Some(p) => p.to_string(),
            None => UNAVAILABLE.to_string(),
        };

        [
            self.source.to_string(),
            self.destination.to_string(),
            self.departure.to_string(),
            self.arrival.to_string(),
            self.transfers_count.to_string(),
            self.flight_numbers_chain.clone(),
            self.bags_allowed.to_string(),
            self.price.to_string(),
            bag_price(self.price_with_1_bag),
            bag_price(self.price_with_2_bags),
        ]
    }
}

/// Write itineraries as CSV with a header row.
pub fn write_csv<W: Write>(writer: W, itineraries: &[Itinerary]) -> Result<(), EncodeError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(ITINERARY_FIELDS)?;
    for itinerary in itineraries {
        csv.write_record(ItineraryRow::from_itinerary(itinerary).to_csv_record())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write itineraries as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, itineraries: &[Itinerary]) -> Result<(), EncodeError> {
    let rows: Vec<ItineraryRow> = itineraries.iter().map(ItineraryRow::from_itinerary).collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write itineraries in the requested format.
pub fn write_itineraries<W: Write>(
    writer: W,
    itineraries: &[Itinerary],
    format: OutputFormat,
) -> Result<(), EncodeError> {
    match format {
        OutputFormat::Csv => write_csv(writer, itineraries),
        OutputFormat::Json => write_json(writer, itineraries),
    }
}
