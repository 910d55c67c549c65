//! Allocation and solution records produced by the colony.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::fitness::fitness;

/// Movement of one rake in a candidate solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Allocation {
    /// Rake being moved.
    pub rake_id: String,
    /// Display number of the rake.
    pub rake_number: String,
    /// Train served, or `None` for a filler move.
    pub train_id: Option<String>,
    /// Display number of the served train.
    pub train_number: Option<String>,
    /// Station the rake starts from.
    pub from_station: String,
    /// Target station. `None` only when the network has no stations at all.
    pub to_station: Option<String>,
    /// Whether the rake travels without payload.
    pub is_empty_movement: bool,
    /// Travel distance for this movement.
    pub distance: f64,
}

impl Allocation {
    /// Whether this allocation serves a train.
    pub fn is_matched(&self) -> bool {
        self.train_id.is_some()
    }
}

/// One ant's complete allocation: every rake appears exactly once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Allocations in construction order: matched rakes first, then fillers.
    pub allocations: Vec<Allocation>,
    /// Number of allocations flagged as empty movements.
    pub total_empty_movements: usize,
    /// Sum of allocation distances.
    pub total_distance: f64,
    /// Quality score in (0, 1]; higher is better.
    pub fitness: f64,
}

impl Solution {
    /// Aggregates allocations into a scored solution.
    pub fn new(allocations: Vec<Allocation>) -> Self {
        let total_empty_movements = allocations.iter().filter(|a| a.is_empty_movement).count();
        let total_distance = allocations.iter().map(|a| a.distance).sum();
        Self {
            fitness: fitness(total_empty_movements, total_distance),
            allocations,
            total_empty_movements,
            total_distance,
        }
    }

    /// Solution with no allocations (fitness 1.0).
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of allocations that serve a train.
    pub fn matched_count(&self) -> usize {
        self.allocations.iter().filter(|a| a.is_matched()).count()
    }
}
