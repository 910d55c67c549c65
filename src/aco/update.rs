//! End-of-iteration pheromone update.

use super::pheromone::PheromoneStore;
use super::types::Solution;

/// Deposit scale applied to a solution's fitness.
pub const DEPOSIT_SCALE: f64 = 100.0;

/// Deposit multiplier for a loaded (productive) movement.
pub const LOADED_DEPOSIT: f64 = 2.0;

/// Deposit multiplier for an empty movement.
pub const EMPTY_DEPOSIT: f64 = 0.5;

/// Evaporates every trail, then reinforces the trails used by `solutions`.
///
/// Each allocation with a destination deposits
/// `fitness * 100 * (2.0 if loaded else 0.5)` on its `(from, to)` trail.
/// Evaporation always completes before the first deposit.
pub fn update_pheromones(
    store: &mut PheromoneStore,
    solutions: &[Solution],
    evaporation_rate: f64,
) {
    store.evaporate_all(evaporation_rate);

    for solution in solutions {
        let deposit = solution.fitness * DEPOSIT_SCALE;
        for allocation in &solution.allocations {
            let Some(to) = allocation.to_station.as_deref() else {
                continue;
            };
            let factor = if allocation.is_empty_movement {
                EMPTY_DEPOSIT
            } else {
                LOADED_DEPOSIT
            };
            store.deposit(&allocation.from_station, to, deposit * factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::Allocation;

    fn movement(from: &str, to: Option<&str>, empty: bool, distance: f64) -> Allocation {
        Allocation {
            rake_id: "r".into(),
            rake_number: "r".into(),
            train_id: None,
            train_number: None,
            from_station: from.into(),
            to_station: to.map(Into::into),
            is_empty_movement: empty,
            distance,
        }
    }

    fn stations() -> Vec<String> {
        vec!["A".to_string(), "B".to_string()]
    }

    #[test]
    fn test_evaporate_then_deposit_loaded() {
        let mut store = PheromoneStore::initialize(1.0, &stations());
        let solution = Solution::new(vec![movement("A", Some("B"), false, 0.0)]);
        update_pheromones(&mut store, &[solution], 0.5);

        // 1.0 * 0.5 + 1.0 * 100 * 2.0
        assert!((store.get("A", "B") - 200.5).abs() < 1e-10);
        assert!((store.get("B", "A") - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_loaded_deposit_is_four_times_empty() {
        let mut loaded = PheromoneStore::initialize(1.0, &stations());
        let mut empty = PheromoneStore::initialize(1.0, &stations());
        let fit = Solution::new(vec![movement("A", Some("B"), false, 10.0)]);
        let mut unfit = fit.clone();
        unfit.allocations[0].is_empty_movement = true;

        update_pheromones(&mut loaded, &[fit], 1.0);
        update_pheromones(&mut empty, &[unfit], 1.0);
        assert!((loaded.get("A", "B") - 4.0 * empty.get("A", "B")).abs() < 1e-10);
    }

    #[test]
    fn test_deposits_accumulate_across_solutions() {
        let mut store = PheromoneStore::initialize(1.0, &stations());
        let solution = Solution::new(vec![movement("A", Some("B"), true, 0.0)]);
        let single = solution.fitness * DEPOSIT_SCALE * EMPTY_DEPOSIT;
        update_pheromones(&mut store, &[solution.clone(), solution], 0.0);
        assert!((store.get("A", "B") - (1.0 + 2.0 * single)).abs() < 1e-10);
    }

    #[test]
    fn test_missing_destination_skipped() {
        let mut store = PheromoneStore::initialize(1.0, &stations());
        let solution = Solution::new(vec![movement("A", None, true, 500.0)]);
        update_pheromones(&mut store, &[solution], 0.5);
        assert_eq!(store.len(), 2);
        assert!((store.get("A", "B") - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_new_pair_starts_from_base() {
        let mut store = PheromoneStore::initialize(1.0, &stations());
        let solution = Solution::new(vec![movement("Z", Some("A"), false, 0.0)]);
        update_pheromones(&mut store, &[solution], 0.5);
        assert!((store.get("Z", "A") - 201.0).abs() < 1e-10);
        assert_eq!(store.len(), 3);
    }
}
