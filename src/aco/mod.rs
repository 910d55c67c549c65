//! Ant Colony Optimization for rake allocation.
//!
//! Each iteration, a colony of ants independently builds a complete
//! rake-to-train allocation guided by pheromone trails between stations
//! and by proximity. Solutions are scored by [`fitness`], which penalizes
//! empty movements far more heavily than distance. After all ants finish,
//! trails evaporate and are reinforced in proportion to solution quality,
//! with productive (loaded) movements reinforced four times as strongly as
//! empty ones.
//!
//! Ant construction is a deterministic arg-max by default; randomness
//! only enters when leftover rakes are sent to a random station. Pass
//! [`SelectionRule::Roulette`] for score-proportional sampling.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Run parameters, validated up front
//! - [`PheromoneStore`]: Trail strengths between ordered station pairs
//! - [`Ant`]: Builds one [`Solution`] against a read-only pheromone store
//! - [`AcoRunner`]: Executes the colony loop
//! - [`OptimizationResult`]: Best allocation, reduction statistics, final trails
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod fitness;
mod pheromone;
mod runner;
mod types;
mod update;

pub use ant::{desirability, distance_table, Ant, LOADED_BONUS};
pub use config::{AcoConfig, RunParams, SelectionRule};
pub use fitness::{fitness, DISTANCE_PENALTY, EMPTY_MOVEMENT_PENALTY};
pub use pheromone::{trail_key, PheromoneStore};
pub use runner::{reduction_percentage, AcoRunner, OptimizationResult, RunSummary};
pub use types::{Allocation, Solution};
pub use update::{update_pheromones, DEPOSIT_SCALE, EMPTY_DEPOSIT, LOADED_DEPOSIT};
