//! Colony execution loop.

use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rand::Rng;
use u_numflow::random::create_rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ant::{distance_table, Ant};
use super::config::AcoConfig;
use super::pheromone::PheromoneStore;
use super::types::{Allocation, Solution};
use super::update::update_pheromones;
use crate::error::{AcoError, AcoResult};
use crate::fleet::{Rake, Train};
use crate::network::{Route, StationGraph};

/// Result of an ant colony run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizationResult {
    /// Allocations of the best solution, one per rake.
    pub allocations: Vec<Allocation>,

    /// Empty movements in the best solution.
    pub total_empty_movements: usize,

    /// Total distance of the best solution.
    pub total_distance: f64,

    /// Percentage drop in empty movements versus the baseline, in [0, 100].
    pub empty_movements_reduction: f64,

    /// Fitness of the best solution, in (0, 1].
    pub optimization_score: f64,

    /// Final trail strengths keyed by [`trail_key`](super::trail_key).
    pub pheromone_map: BTreeMap<String, f64>,

    /// Rakes that start unloaded.
    pub baseline_empty_movements: usize,

    /// Iterations executed.
    pub iterations: usize,

    /// Ants constructed per iteration.
    pub ants_per_iteration: usize,

    /// Best fitness after each iteration (non-decreasing).
    pub fitness_history: Vec<f64>,

    /// Wall-clock time spent in the run.
    pub execution_time: Duration,
}

/// Record of a completed run, as stored by run history consumers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSummary {
    /// Initial trail strength the run started from.
    pub pheromone_strength: f64,
    /// Evaporation rate applied each iteration.
    pub evaporation_rate: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Percentage drop in empty movements versus the baseline.
    pub empty_movements_reduction: f64,
    /// Fitness of the best solution.
    pub optimization_score: f64,
    /// Wall-clock run time in milliseconds.
    pub execution_time_ms: u64,
    /// Run outcome; always `"completed"` for a returned result.
    pub status: String,
}

impl OptimizationResult {
    /// Summarizes the run together with the parameters that produced it.
    pub fn summary(&self, config: &AcoConfig) -> RunSummary {
        RunSummary {
            pheromone_strength: config.pheromone_strength,
            evaporation_rate: config.evaporation_rate,
            iterations: self.iterations,
            empty_movements_reduction: self.empty_movements_reduction,
            optimization_score: self.optimization_score,
            execution_time_ms: u64::try_from(self.execution_time.as_millis())
                .unwrap_or(u64::MAX),
            status: "completed".to_string(),
        }
    }
}

/// Executes the ant colony optimization.
///
/// # Usage
///
/// ```
/// use rake_aco::aco::{AcoConfig, AcoRunner};
/// use rake_aco::fleet::{Rake, Train};
/// use rake_aco::network::Route;
///
/// let rakes = vec![Rake::new("r1", "A"), Rake::new("r2", "B").with_loaded(true)];
/// let trains = vec![Train::new("t1", "C")];
/// let routes = vec![Route::new("R1", ["A", "B", "C"], 200.0)];
///
/// let config = AcoConfig::default().with_iterations(5).with_seed(42);
/// let result = AcoRunner::run(&rakes, &trains, &routes, &config).unwrap();
/// assert_eq!(result.allocations.len(), 2);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony for `config.iterations` iterations.
    ///
    /// Each iteration constructs `max(min_ants, rakes.len())` independent
    /// solutions against the same pheromone state, then updates the store
    /// once. The best solution across all iterations is returned; ties keep
    /// the earliest.
    ///
    /// # Errors
    /// Returns an error if the configuration or a route is invalid, or if
    /// rake or train ids are not unique.
    pub fn run(
        rakes: &[Rake],
        trains: &[Train],
        routes: &[Route],
        config: &AcoConfig,
    ) -> AcoResult<OptimizationResult> {
        config.validate()?;
        check_unique(rakes.iter().map(|r| r.id.as_str()), AcoError::DuplicateRake)?;
        check_unique(
            trains.iter().map(|t| t.id.as_str()),
            AcoError::DuplicateTrain,
        )?;

        let started = Instant::now();
        let graph = StationGraph::new(routes.to_vec())?
            .with_fallback(config.fallback)
            .with_unknown_distance(config.unknown_distance);

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut pheromones =
            PheromoneStore::initialize(config.pheromone_strength, graph.stations());
        let distances = distance_table(rakes, trains, &graph);
        let ant = Ant::new(rakes, trains, &graph, &distances, config);
        let ant_count = config.ant_count(rakes.len());

        debug!(
            "colony start: {} rakes, {} trains, {} stations, {} ants x {} iterations",
            rakes.len(),
            trains.len(),
            graph.stations().len(),
            ant_count,
            config.iterations
        );

        let mut best: Option<Solution> = None;
        let mut fitness_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            // One seed per ant keeps serial and parallel runs identical.
            let seeds: Vec<u64> = (0..ant_count).map(|_| rng.random()).collect();
            let solutions = construct_all(&ant, &pheromones, &seeds, config.parallel);

            for (index, solution) in solutions.iter().enumerate() {
                trace!(
                    "iteration {iteration} ant {index}: empty={} distance={:.1} fitness={:.6}",
                    solution.total_empty_movements,
                    solution.total_distance,
                    solution.fitness
                );
                if best.as_ref().is_none_or(|b| solution.fitness > b.fitness) {
                    best = Some(solution.clone());
                }
            }

            update_pheromones(&mut pheromones, &solutions, config.evaporation_rate);

            let best_fitness = best.as_ref().map_or(0.0, |b| b.fitness);
            fitness_history.push(best_fitness);
            debug!("iteration {iteration}: best fitness {best_fitness:.6}");
        }

        let best = best.unwrap_or_else(Solution::empty);
        let baseline = rakes.iter().filter(|r| !r.is_loaded).count();
        let reduction = reduction_percentage(baseline, best.total_empty_movements);
        let execution_time = started.elapsed();

        info!(
            "colony finished in {:?}: {} empty movements (baseline {}), \
             reduction {:.1}%, score {:.6}",
            execution_time, best.total_empty_movements, baseline, reduction, best.fitness
        );

        Ok(OptimizationResult {
            allocations: best.allocations,
            total_empty_movements: best.total_empty_movements,
            total_distance: best.total_distance,
            empty_movements_reduction: reduction,
            optimization_score: best.fitness,
            pheromone_map: pheromones.snapshot(),
            baseline_empty_movements: baseline,
            iterations: config.iterations,
            ants_per_iteration: ant_count,
            fitness_history,
            execution_time,
        })
    }
}

/// Percentage drop from `baseline` to `achieved` empty movements, clamped
/// to [0, 100]. A zero baseline reports 0.
pub fn reduction_percentage(baseline: usize, achieved: usize) -> f64 {
    if baseline == 0 {
        return 0.0;
    }
    let baseline = baseline as f64;
    ((baseline - achieved as f64) / baseline * 100.0).max(0.0)
}

/// Builds one solution per seed, in seed order.
fn construct_all(
    ant: &Ant<'_>,
    pheromones: &PheromoneStore,
    seeds: &[u64],
    parallel: bool,
) -> Vec<Solution> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            return seeds
                .par_iter()
                .map(|&seed| ant.construct(pheromones, &mut create_rng(seed)))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    seeds
        .iter()
        .map(|&seed| ant.construct(pheromones, &mut create_rng(seed)))
        .collect()
}

fn check_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    err: fn(String) -> AcoError,
) -> AcoResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(err(id.to_string()));
        }
    }
    Ok(())
}
