//! Solution scoring.

/// Penalty per empty movement.
pub const EMPTY_MOVEMENT_PENALTY: f64 = 1000.0;

/// Penalty per unit of distance.
pub const DISTANCE_PENALTY: f64 = 0.1;

/// Scores a solution: `1 / (1 + empty * 1000 + distance * 0.1)`.
///
/// The result lies in (0, 1] and strictly decreases in both terms, so it
/// can be used directly as a pheromone deposit weight. One empty movement
/// outweighs 10,000 units of distance.
pub fn fitness(empty_movements: usize, total_distance: f64) -> f64 {
    1.0 / (1.0
        + empty_movements as f64 * EMPTY_MOVEMENT_PENALTY
        + total_distance * DISTANCE_PENALTY)
}
