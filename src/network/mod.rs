//! Rail network: routes and the station graph derived from them.
//!
//! The network is only used to answer "how far is station A from
//! station B". Each route spreads its total distance uniformly across its
//! consecutive station gaps; pairs not sharing a route fall back to a
//! configurable approximation, and stations missing from every route cost
//! a fixed sentinel distance.
//!
//! # Key Types
//!
//! - [`Route`]: Ordered station sequence with a total distance
//! - [`StationGraph`]: Deduplicated station set and distance resolver
//! - [`FallbackDistance`]: Policy for pairs that share no route

mod graph;
mod types;

pub use graph::{FallbackDistance, StationGraph, DEFAULT_UNKNOWN_DISTANCE};
pub use types::Route;
