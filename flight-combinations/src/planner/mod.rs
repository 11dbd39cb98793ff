//! Itinerary planner.
//!
//! This module implements the combination search: given every flight leg,
//! find every itinerary that chains legs end to end within the connection
//! window, without departing from an airport twice and without ending at
//! an earlier stopover.
//!
//! The search is deliberately exhaustive. It enumerates, it does not rank.

mod chain;
mod config;
mod search;

pub use chain::{ChainRejection, can_chain, check_chain};
pub use config::{ConfigError, SearchConfig};
pub use search::{Planner, SearchResult};
