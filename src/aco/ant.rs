//! Solution construction by a single ant.

use rand::Rng;

use super::config::{AcoConfig, SelectionRule};
use super::pheromone::PheromoneStore;
use super::types::{Allocation, Solution};
use crate::fleet::{Rake, Train};
use crate::network::StationGraph;

/// Desirability multiplier for rakes that are already loaded.
pub const LOADED_BONUS: f64 = 2.0;

/// Desirability of sending a rake along a trail:
/// `pheromone^alpha * (1 / (distance + 1))^beta * bonus`.
pub fn desirability(pheromone: f64, distance: f64, loaded: bool, alpha: f64, beta: f64) -> f64 {
    let bonus = if loaded { LOADED_BONUS } else { 1.0 };
    pheromone.powf(alpha) * (1.0 / (distance + 1.0)).powf(beta) * bonus
}

/// Builds complete allocations from a fixed snapshot of rakes and trains.
///
/// An `Ant` holds only shared references and never mutates them, so any
/// number of ants can construct solutions concurrently against the same
/// pheromone store.
#[derive(Debug, Clone, Copy)]
pub struct Ant<'a> {
    rakes: &'a [Rake],
    trains: &'a [Train],
    graph: &'a StationGraph,
    /// Row-major `rakes x trains` distance table.
    distances: &'a [f64],
    config: &'a AcoConfig,
}

impl<'a> Ant<'a> {
    /// Creates an ant over the given snapshot.
    ///
    /// `distances[r * trains.len() + t]` must hold the distance from rake
    /// `r` to train `t`; see [`distance_table`].
    pub fn new(
        rakes: &'a [Rake],
        trains: &'a [Train],
        graph: &'a StationGraph,
        distances: &'a [f64],
        config: &'a AcoConfig,
    ) -> Self {
        debug_assert_eq!(distances.len(), rakes.len() * trains.len());
        Self {
            rakes,
            trains,
            graph,
            distances,
            config,
        }
    }

    /// Constructs one solution.
    ///
    /// Trains are served in input order, each by the most desirable rake
    /// still available. Rakes left over once trains or rakes run out are
    /// sent empty to a random station. Trains left over are dropped.
    pub fn construct<R: Rng>(&self, pheromones: &PheromoneStore, rng: &mut R) -> Solution {
        let mut available: Vec<usize> = (0..self.rakes.len()).collect();
        let mut allocations = Vec::with_capacity(self.rakes.len());
        let mut scores = Vec::with_capacity(self.rakes.len());

        for (t, train) in self.trains.iter().enumerate() {
            if available.is_empty() {
                break;
            }

            scores.clear();
            scores.extend(available.iter().map(|&r| {
                let rake = &self.rakes[r];
                desirability(
                    pheromones.get(&rake.location, &train.station),
                    self.distance(r, t),
                    rake.is_loaded,
                    self.config.alpha,
                    self.config.beta,
                )
            }));

            let pick = match self.config.selection {
                SelectionRule::ArgMax => arg_max(&scores),
                SelectionRule::Roulette => roulette(&scores, rng),
            };
            let r = available.remove(pick);
            let rake = &self.rakes[r];

            allocations.push(Allocation {
                rake_id: rake.id.clone(),
                rake_number: rake.number.clone(),
                train_id: Some(train.id.clone()),
                train_number: Some(train.number.clone()),
                from_station: rake.location.clone(),
                to_station: Some(train.station.clone()),
                is_empty_movement: !rake.is_loaded,
                distance: self.distance(r, t),
            });
        }

        for r in available {
            allocations.push(self.filler(&self.rakes[r], rng));
        }

        Solution::new(allocations)
    }

    fn distance(&self, rake: usize, train: usize) -> f64 {
        self.distances[rake * self.trains.len() + train]
    }

    /// Sends an unmatched rake empty to a uniformly random station.
    fn filler<R: Rng>(&self, rake: &Rake, rng: &mut R) -> Allocation {
        let stations = self.graph.stations();
        let (to_station, distance) = if stations.is_empty() {
            (None, self.graph.unknown_distance())
        } else {
            let target = &stations[rng.random_range(0..stations.len())];
            (
                Some(target.clone()),
                self.graph.distance(&rake.location, target),
            )
        };

        Allocation {
            rake_id: rake.id.clone(),
            rake_number: rake.number.clone(),
            train_id: None,
            train_number: None,
            from_station: rake.location.clone(),
            to_station,
            is_empty_movement: true,
            distance,
        }
    }
}

/// Precomputes the `rakes x trains` distance table, row-major by rake.
pub fn distance_table(rakes: &[Rake], trains: &[Train], graph: &StationGraph) -> Vec<f64> {
    rakes
        .iter()
        .flat_map(|rake| {
            trains
                .iter()
                .map(move |train| graph.distance(&rake.location, &train.station))
        })
        .collect()
}

/// Index of the strictly highest score; the first one wins ties.
fn arg_max(scores: &[f64]) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, &score) in scores.iter().enumerate() {
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

/// Score-proportional sampling. Degenerates to [`arg_max`] when no score
/// is positive.
fn roulette<R: Rng>(scores: &[f64], rng: &mut R) -> usize {
    let total: f64 = scores.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return arg_max(scores);
    }

    let mut point = rng.random_range(0.0..total);
    for (i, &score) in scores.iter().enumerate() {
        if point < score {
            return i;
        }
        point -= score;
    }
    // Rounding can leave `point` just past the last bucket.
    scores.len() - 1
}
