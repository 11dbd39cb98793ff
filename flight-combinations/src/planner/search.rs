//! Level-by-level combination search.
//!
//! Starting from one itinerary per flight, each level joins the itineraries
//! created by the previous level (the frontier) with every itinerary seen so
//! far, frontier included. Search stops when a level produces nothing new.
//! Itineraries that have left the frontier are never paired with each other
//! again, so each pairing is tried once.

use std::sync::Arc;

use tracing::{debug, trace};

use super::chain::check_chain;
use super::config::SearchConfig;
use crate::domain::{Flight, Itinerary};

/// Result of a combination search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Every itinerary found, in the order produced.
    pub itineraries: Vec<Itinerary>,

    /// Number of levels that had a non-empty frontier.
    pub levels: usize,

    /// Number of ordered pairs checked against the chain rules.
    pub pairs_examined: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            itineraries: Vec::new(),
            levels: 0,
            pairs_examined: 0,
        }
    }
}

/// Itinerary combination planner.
pub struct Planner<'a> {
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    /// Find every itinerary that can be built from the given flights.
    ///
    /// Each flight becomes a one-flight itinerary, in input order.
    pub fn search_flights(&self, flights: Vec<Flight>) -> SearchResult {
        let units = flights
            .into_iter()
            .map(|f| Itinerary::single(Arc::new(f)))
            .collect();
        self.search(units)
    }

    /// Find every itinerary that can be built by chaining `units`.
    ///
    /// The result starts with `units` themselves, followed by each level's
    /// new itineraries in the order they were produced. The same input
    /// order always yields the same output order.
    pub fn search(&self, units: Vec<Itinerary>) -> SearchResult {
        if units.is_empty() {
            return SearchResult::empty();
        }

        // `seen[..frontier_start]` is settled, `seen[frontier_start..]` is
        // the frontier. Together they are also the result so far.
        let mut seen = units;
        let mut frontier_start = 0;
        let mut levels = 0;
        let mut pairs_examined = 0;

        while frontier_start < seen.len() {
            levels += 1;
            let frontier_end = seen.len();
            let mut next_frontier = Vec::new();

            for i in frontier_start..frontier_end {
                let head = &seen[i];

                for (j, tail) in seen[..frontier_end].iter().enumerate() {
                    // Identity, not equality: duplicate rows are distinct
                    if i == j {
                        continue;
                    }
                    pairs_examined += 1;

                    if let Err(reason) = check_chain(head, tail, self.config) {
                        trace!(head = i, tail = j, %reason, "Pair rejected");
                        continue;
                    }

                    match head.concat(tail) {
                        Ok(itinerary) => next_frontier.push(itinerary),
                        Err(e) => {
                            debug!(head = i, tail = j, error = %e, "Failed to join itineraries");
                        }
                    }
                }
            }

            debug!(
                level = levels,
                frontier = frontier_end - frontier_start,
                produced = next_frontier.len(),
                "Search level complete"
            );

            frontier_start = frontier_end;
            seen.extend(next_frontier);
        }

        debug!(
            itineraries = seen.len(),
            levels, pairs_examined, "Combination search complete"
        );

        SearchResult {
            itineraries: seen,
            levels,
            pairs_examined,
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
