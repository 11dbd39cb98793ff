//! CSV flight loader.
//!
//! Reads comma-separated flight rows into [`Flight`] records. The header
//! must name exactly the eight flight fields, in any order. Values are
//! trimmed before parsing. Any malformed row aborts the whole load.

use std::io::Read;
use std::str::FromStr;

use csv::StringRecord;
use tracing::debug;

use super::error::LoadError;
use crate::domain::{Airport, Flight, FlightTime};

/// Input field names, in the order assumed for headerless input.
pub const FLIGHT_FIELDS: [&str; 8] = [
    "source",
    "destination",
    "departure",
    "arrival",
    "flight_number",
    "price",
    "bags_allowed",
    "bag_price",
];

/// Column index of each flight field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    source: usize,
    destination: usize,
    departure: usize,
    arrival: usize,
    flight_number: usize,
    price: usize,
    bags_allowed: usize,
    bag_price: usize,
}

impl Columns {
    /// Columns in [`FLIGHT_FIELDS`] order.
    fn canonical() -> Self {
        Columns {
            source: 0,
            destination: 1,
            departure: 2,
            arrival: 3,
            flight_number: 4,
            price: 5,
            bags_allowed: 6,
            bag_price: 7,
        }
    }

    /// Map a header row onto columns.
    ///
    /// Missing names are reported first, then unknown names, then
    /// duplicates.
    fn from_header(header: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<&str> = header.iter().collect();

        let missing: Vec<String> = FLIGHT_FIELDS
            .iter()
            .filter(|field| !names.contains(field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingHeaders(missing));
        }

        let mut unknown: Vec<String> = Vec::new();
        let mut duplicated: Vec<String> = Vec::new();
        for (i, name) in names.iter().enumerate() {
            if !FLIGHT_FIELDS.contains(name) {
                if !unknown.iter().any(|u| u == name) {
                    unknown.push(name.to_string());
                }
            } else if names[..i].contains(name) && !duplicated.iter().any(|d| d == name) {
                duplicated.push(name.to_string());
            }
        }
        if !unknown.is_empty() {
            return Err(LoadError::UnknownHeaders(unknown));
        }
        if !duplicated.is_empty() {
            return Err(LoadError::DuplicateHeaders(duplicated));
        }

        // Every field is present exactly once at this point
        let index = |field: &str| names.iter().position(|n| *n == field).unwrap_or(0);
        Ok(Columns {
            source: index("source"),
            destination: index("destination"),
            departure: index("departure"),
            arrival: index("arrival"),
            flight_number: index("flight_number"),
            price: index("price"),
            bags_allowed: index("bags_allowed"),
            bag_price: index("bag_price"),
        })
    }

    /// Build a flight from one data row.
    fn flight(&self, record: &StringRecord, line: u64) -> Result<Flight, LoadError> {
        if record.len() != FLIGHT_FIELDS.len() {
            return Err(LoadError::WrongFieldCount {
                line,
                expected: FLIGHT_FIELDS.len(),
                found: record.len(),
            });
        }
        let raw = |idx: usize| record.get(idx).unwrap_or("");

        Ok(Flight {
            source: parse_field(raw(self.source), "source", line, Airport::parse)?,
            destination: parse_field(raw(self.destination), "destination", line, Airport::parse)?,
            departure: parse_field(raw(self.departure), "departure", line, FlightTime::parse)?,
            arrival: parse_field(raw(self.arrival), "arrival", line, FlightTime::parse)?,
            flight_number: raw(self.flight_number).to_string(),
            price: parse_field(raw(self.price), "price", line, u64::from_str)?,
            bags_allowed: parse_field(raw(self.bags_allowed), "bags_allowed", line, u32::from_str)?,
            bag_price: parse_field(raw(self.bag_price), "bag_price", line, u64::from_str)?,
        })
    }
}

/// Parse one field, attaching the location to any failure.
fn parse_field<T, E, F>(value: &str, field: &'static str, line: u64, parse: F) -> Result<T, LoadError>
where
    F: FnOnce(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    parse(value).map_err(|e| LoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Read every flight from a CSV stream.
///
/// With `has_header` false, rows are read in [`FLIGHT_FIELDS`] order.
///
/// # Errors
///
/// Returns `Err` if the header has the wrong shape, a row cannot be parsed,
/// or the stream is not valid CSV.
///
/// # Examples
///
/// ```
/// use flight_combinations::io::load_flights;
///
/// let input = "\
/// flight_number,source,destination,departure,arrival,price,bags_allowed,bag_price
/// PV511,USM,HKT,2017-02-11T06:25:00,2017-02-11T07:25:00,35,1,12
/// ";
/// let flights = load_flights(input.as_bytes(), true).unwrap();
///
/// assert_eq!(flights.len(), 1);
/// assert_eq!(flights[0].source.as_str(), "USM");
/// assert_eq!(flights[0].price, 35);
/// ```
pub fn load_flights<R: Read>(reader: R, has_header: bool) -> Result<Vec<Flight>, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = csv.records();

    let columns = if has_header {
        match records.next() {
            Some(header) => Columns::from_header(&header?)?,
            None => {
                return Err(LoadError::MissingHeaders(
                    FLIGHT_FIELDS.iter().map(|f| f.to_string()).collect(),
                ));
            }
        }
    } else {
        Columns::canonical()
    };

    let mut flights = Vec::new();
    for (i, record) in records.enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(i as u64 + 1);
        flights.push(columns.flight(&record, line)?);
    }

    debug!(flights = flights.len(), has_header, "Loaded flights");

    Ok(flights)
}
