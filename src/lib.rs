//! Rail rake allocation by Ant Colony Optimization.
//!
//! Given a snapshot of rakes (reusable coach sets), trains waiting for a
//! rake, and the route catalog, the optimizer assigns every rake either to
//! a train or to a repositioning move, trying to minimize empty movements
//! first and total distance second.
//!
//! - **network**: Routes and the station graph that resolves distances.
//! - **fleet**: Rake and train records, and folding results back onto rakes.
//! - **aco**: Pheromone store, ant construction, fitness, and the colony loop.
//!
//! # Example
//!
//! ```
//! use rake_aco::{run_aco_optimization, RunParams};
//! use rake_aco::fleet::{Rake, Train};
//! use rake_aco::network::Route;
//!
//! let rakes = vec![
//!     Rake::new("r1", "A"),
//!     Rake::new("r2", "A"),
//!     Rake::new("r3", "B").with_loaded(true),
//! ];
//! let trains = vec![Train::new("t1", "C"), Train::new("t2", "D")];
//! let routes = vec![Route::new("R1", ["A", "B", "C", "D"], 300.0)];
//!
//! let params = RunParams { pheromone_strength: 1.5, evaporation_rate: 0.5, iterations: 1 };
//! let result = run_aco_optimization(&rakes, &trains, &routes, params).unwrap();
//! assert_eq!(result.allocations.len(), 3);
//! assert!((0.0..=100.0).contains(&result.empty_movements_reduction));
//! ```
//!
//! # Logging
//!
//! Progress is reported through the [`log`] facade; install any logger to
//! see it. Nothing is printed otherwise.

pub mod aco;
pub mod error;
pub mod fleet;
pub mod network;

pub use aco::{AcoConfig, AcoRunner, OptimizationResult, RunParams};
pub use error::{AcoError, AcoResult};

use fleet::{Rake, Train};
use network::Route;

/// Runs the colony with default settings for everything but `params`.
///
/// The random source is unseeded; use [`AcoRunner::run`] with
/// [`AcoConfig::with_seed`] for reproducible runs.
pub fn run_aco_optimization(
    rakes: &[Rake],
    trains: &[Train],
    routes: &[Route],
    params: RunParams,
) -> AcoResult<OptimizationResult> {
    AcoRunner::run(rakes, trains, routes, &AcoConfig::from(params))
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_result_json_shape() {
        let rakes = vec![Rake::new("r1", "A").with_loaded(true)];
        let trains = vec![Train::new("t1", "B")];
        let routes = vec![Route::new("R1", ["A", "B"], 50.0)];
        let config = AcoConfig::default().with_iterations(2).with_seed(5);

        let result = AcoRunner::run(&rakes, &trains, &routes, &config).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["allocations"][0]["train_id"], "t1");
        assert_eq!(json["total_empty_movements"], 0);
        assert!(json["pheromone_map"]["A-B"].as_f64().unwrap() > 0.0);
        assert!(json["pheromone_map"]["B-A"].is_number());
    }

    #[test]
    fn test_rake_round_trip() {
        let rake = Rake::new("r1", "A").with_capacity(72).with_loaded(true);
        let json = serde_json::to_string(&rake).unwrap();
        let back: Rake = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rake);
    }
}
