//! Itinerary type.
//!
//! An `Itinerary` is a chain of one or more flights, each landing where the
//! next one takes off. Summary values (endpoints, times, prices and bag
//! allowance) are computed once at construction.

use std::sync::Arc;

use super::{Airport, DomainError, Flight, FlightTime};

/// A chain of connected flights.
///
/// Uses `Arc<Flight>` so that concatenating two itineraries copies
/// pointers rather than flight records.
///
/// # Invariants
///
/// - At least one flight
/// - Consecutive flights connect (destination of one = source of next)
/// - Cached values agree with the flights they summarise
#[derive(Debug, Clone)]
pub struct Itinerary {
    flights: Vec<Arc<Flight>>,
    departure: FlightTime,
    arrival: FlightTime,
    price: u64,
    bag_price: u64,
    bags_allowed: u32,
}

impl Itinerary {
    /// Creates a one-flight itinerary.
    pub fn single(flight: Arc<Flight>) -> Self {
        Itinerary {
            departure: flight.departure,
            arrival: flight.arrival,
            price: flight.price,
            bag_price: flight.bag_price,
            bags_allowed: flight.bags_allowed,
            flights: vec![flight],
        }
    }

    /// Constructs an itinerary from a sequence of flights.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The flight list is empty
    /// - Flights don't connect (destination != next source)
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use flight_combinations::domain::{Airport, Flight, FlightTime, Itinerary};
    ///
    /// let leg = |from: &str, to: &str, dep: &str, arr: &str, price| {
    ///     Arc::new(Flight {
    ///         source: Airport::parse(from).unwrap(),
    ///         destination: Airport::parse(to).unwrap(),
    ///         departure: FlightTime::parse(dep).unwrap(),
    ///         arrival: FlightTime::parse(arr).unwrap(),
    ///         flight_number: format!("{from}{to}"),
    ///         price,
    ///         bags_allowed: 2,
    ///         bag_price: 10,
    ///     })
    /// };
    ///
    /// let itinerary = Itinerary::new(vec![
    ///     leg("PRG", "VIE", "2021-09-01T10:00:00", "2021-09-01T11:00:00", 50),
    ///     leg("VIE", "BCN", "2021-09-01T13:00:00", "2021-09-01T15:00:00", 70),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(itinerary.source().as_str(), "PRG");
    /// assert_eq!(itinerary.destination().as_str(), "BCN");
    /// assert_eq!(itinerary.price(), 120);
    /// assert_eq!(itinerary.transfer_count(), 1);
    /// ```
    pub fn new(flights: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        let mut iter = flights.into_iter();
        let first = iter.next().ok_or(DomainError::EmptyItinerary)?;

        iter.try_fold(Itinerary::single(first), |acc, flight| {
            acc.concat(&Itinerary::single(flight))
        })
    }

    /// Builds the itinerary that flies `self` and then `next`.
    ///
    /// Only the junction is checked: `self.destination()` must equal
    /// `next.source()`. Timing and revisit rules belong to the planner.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the two itineraries don't share the junction airport.
    pub fn concat(&self, next: &Itinerary) -> Result<Self, DomainError> {
        if self.destination() != next.source() {
            return Err(DomainError::FlightsNotConnected(
                self.destination().clone(),
                next.source().clone(),
            ));
        }

        let mut flights = Vec::with_capacity(self.flights.len() + next.flights.len());
        flights.extend(self.flights.iter().cloned());
        flights.extend(next.flights.iter().cloned());

        Ok(Itinerary {
            flights,
            departure: self.departure,
            arrival: next.arrival,
            price: self.price.saturating_add(next.price),
            bag_price: self.bag_price.saturating_add(next.bag_price),
            bags_allowed: self.bags_allowed.min(next.bags_allowed),
        })
    }

    /// Returns all flights in order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Returns the number of flights.
    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Returns the number of transfers (flights - 1).
    pub fn transfer_count(&self) -> usize {
        self.flights.len() - 1
    }

    /// Returns the departure airport of the first flight.
    pub fn source(&self) -> &Airport {
        &self.flights[0].source
    }

    /// Returns the arrival airport of the last flight.
    pub fn destination(&self) -> &Airport {
        &self.flights[self.flights.len() - 1].destination
    }

    /// Returns the departure time of the first flight.
    pub fn departure(&self) -> FlightTime {
        self.departure
    }

    /// Returns the arrival time of the last flight.
    pub fn arrival(&self) -> FlightTime {
        self.arrival
    }

    /// Returns the summed ticket price of all flights.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Returns the summed per-bag price of all flights.
    pub fn bag_price(&self) -> u64 {
        self.bag_price
    }

    /// Returns the bag allowance of the most restrictive flight.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the total price when travelling with `bags` checked bags.
    ///
    /// Returns `None` if any flight in the chain doesn't allow that many.
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use flight_combinations::domain::{Airport, Flight, FlightTime, Itinerary};
    /// let flight = Arc::new(Flight {
    ///     source: Airport::parse("PRG").unwrap(),
    ///     destination: Airport::parse("VIE").unwrap(),
    ///     departure: FlightTime::parse("2021-09-01T10:00:00").unwrap(),
    ///     arrival: FlightTime::parse("2021-09-01T11:00:00").unwrap(),
    ///     flight_number: "OK123".into(),
    ///     price: 100,
    ///     bags_allowed: 1,
    ///     bag_price: 15,
    /// });
    /// let itinerary = Itinerary::single(flight);
    ///
    /// assert_eq!(itinerary.price_with_bags(0), Some(100));
    /// assert_eq!(itinerary.price_with_bags(1), Some(115));
    /// assert_eq!(itinerary.price_with_bags(2), None);
    /// ```
    pub fn price_with_bags(&self, bags: u32) -> Option<u64> {
        if bags > self.bags_allowed {
            return None;
        }
        Some(
            self.price
                .saturating_add(self.bag_price.saturating_mul(u64::from(bags))),
        )
    }

    /// Returns the flight numbers in chain order.
    pub fn flight_numbers(&self) -> impl Iterator<Item = &str> {
        self.flights.iter().map(|f| f.flight_number.as_str())
    }

    /// Returns the flight numbers joined with `->`.
    pub fn flight_numbers_chain(&self) -> String {
        self.flight_numbers().collect::<Vec<_>>().join("->")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn flight(from: &str, to: &str, price: u64, bags_allowed: u32, bag_price: u64) -> Arc<Flight> {
        Arc::new(Flight {
            source: Airport::parse(from).unwrap(),
            destination: Airport::parse(to).unwrap(),
            departure: FlightTime::parse("2021-09-01T10:00:00").unwrap(),
            arrival: FlightTime::parse("2021-09-01T11:00:00").unwrap(),
            flight_number: format!("{from}-{to}"),
            price,
            bags_allowed,
            bag_price,
        })
    }

    /// (price, bags_allowed, bag_price) for each leg of a linear chain.
    fn legs_strategy() -> impl Strategy<Value = Vec<(u64, u32, u64)>> {
        prop::collection::vec((0u64..10_000, 0u32..4, 0u64..500), 1..8)
    }

    fn chain(legs: &[(u64, u32, u64)]) -> Vec<Arc<Flight>> {
        legs.iter()
            .enumerate()
            .map(|(i, &(price, bags, bag_price))| {
                flight(&format!("P{i}"), &format!("P{}", i + 1), price, bags, bag_price)
            })
            .collect()
    }

    proptest! {
        #[test]
        fn derived_values_match_flights(legs in legs_strategy()) {
            let flights = chain(&legs);
            let itinerary = Itinerary::new(flights.clone()).unwrap();

            prop_assert_eq!(itinerary.price(), legs.iter().map(|l| l.0).sum::<u64>());
            prop_assert_eq!(itinerary.bag_price(), legs.iter().map(|l| l.2).sum::<u64>());
            prop_assert_eq!(itinerary.bags_allowed(), legs.iter().map(|l| l.1).min().unwrap());
            prop_assert_eq!(itinerary.transfer_count(), legs.len() - 1);
            prop_assert_eq!(itinerary.source(), &flights[0].source);
            prop_assert_eq!(itinerary.destination(), &flights[flights.len() - 1].destination);
        }

        #[test]
        fn concat_at_any_split_agrees(legs in legs_strategy(), split in any::<prop::sample::Index>()) {
            let flights = chain(&legs);
            let whole = Itinerary::new(flights.clone()).unwrap();

            // Both halves must be non-empty
            prop_assume!(flights.len() >= 2);
            let at = 1 + split.index(flights.len() - 1);
            let head = Itinerary::new(flights[..at].to_vec()).unwrap();
            let tail = Itinerary::new(flights[at..].to_vec()).unwrap();
            let joined = head.concat(&tail).unwrap();

            prop_assert_eq!(joined.price(), head.price() + tail.price());
            prop_assert_eq!(joined.bag_price(), head.bag_price() + tail.bag_price());
            prop_assert_eq!(joined.bags_allowed(), head.bags_allowed().min(tail.bags_allowed()));
            prop_assert_eq!(joined.flights(), whole.flights());
        }

        #[test]
        fn price_with_bags_respects_allowance(legs in legs_strategy(), bags in 0u32..4) {
            let itinerary = Itinerary::new(chain(&legs)).unwrap();
            let priced = itinerary.price_with_bags(bags);

            if bags <= itinerary.bags_allowed() {
                prop_assert_eq!(
                    priced,
                    Some(itinerary.price() + itinerary.bag_price() * u64::from(bags))
                );
            } else {
                prop_assert_eq!(priced, None);
            }
        }
    }
}
