//! Flight combination finder.
//!
//! Reads a list of flight legs and lists every itinerary that can be built
//! by chaining them, with prices for zero, one and two checked bags.

pub mod cli;
pub mod domain;
pub mod io;
pub mod planner;
