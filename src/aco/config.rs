//! Colony configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AcoError, AcoResult};
use crate::network::{FallbackDistance, DEFAULT_UNKNOWN_DISTANCE};

/// How an ant picks a rake for each train.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectionRule {
    /// Take the rake with the highest desirability; the first one wins ties.
    ///
    /// Construction is fully deterministic; randomness only enters through
    /// filler moves for leftover rakes.
    #[default]
    ArgMax,

    /// Sample a rake with probability proportional to its desirability
    /// (roulette wheel), as in canonical Ant System.
    Roulette,
}

/// The three parameters a caller supplies for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunParams {
    /// Initial trail strength for every station pair. Must be positive.
    pub pheromone_strength: f64,
    /// Fraction of every trail removed per iteration, in [0, 1].
    pub evaporation_rate: f64,
    /// Number of colony iterations. Must be positive.
    pub iterations: usize,
}

/// Configuration for the ant colony.
///
/// # Examples
///
/// ```
/// use rake_aco::aco::{AcoConfig, SelectionRule};
///
/// let config = AcoConfig::default()
///     .with_pheromone_strength(1.5)
///     .with_evaporation_rate(0.5)
///     .with_iterations(20)
///     .with_selection(SelectionRule::ArgMax)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcoConfig {
    /// Initial trail strength, also the value read for unknown pairs.
    pub pheromone_strength: f64,

    /// Evaporation rate in [0, 1]. Trails are multiplied by `1 - rate`.
    pub evaporation_rate: f64,

    /// Number of iterations.
    pub iterations: usize,

    /// Pheromone exponent in the desirability score.
    pub alpha: f64,

    /// Proximity exponent in the desirability score.
    pub beta: f64,

    /// Lower bound on ants per iteration. The colony uses
    /// `max(min_ants, rake_count)`.
    pub min_ants: usize,

    /// Distance charged for stations that appear on no route.
    pub unknown_distance: f64,

    /// Approximation for station pairs without a common route.
    pub fallback: FallbackDistance,

    /// Rake selection rule used during construction.
    pub selection: SelectionRule,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Build the ants of one iteration on the rayon thread pool.
    ///
    /// Results are identical to serial runs. Ignored without the
    /// `parallel` feature.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            pheromone_strength: 1.0,
            evaporation_rate: 0.1,
            iterations: 100,
            alpha: 1.0,
            beta: 2.5,
            min_ants: 10,
            unknown_distance: DEFAULT_UNKNOWN_DISTANCE,
            fallback: FallbackDistance::default(),
            selection: SelectionRule::default(),
            seed: None,
            parallel: false,
        }
    }
}

impl From<RunParams> for AcoConfig {
    fn from(params: RunParams) -> Self {
        Self::default()
            .with_pheromone_strength(params.pheromone_strength)
            .with_evaporation_rate(params.evaporation_rate)
            .with_iterations(params.iterations)
    }
}

impl AcoConfig {
    pub fn with_pheromone_strength(mut self, strength: f64) -> Self {
        self.pheromone_strength = strength;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_min_ants(mut self, n: usize) -> Self {
        self.min_ants = n;
        self
    }

    pub fn with_unknown_distance(mut self, distance: f64) -> Self {
        self.unknown_distance = distance;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackDistance) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_selection(mut self, selection: SelectionRule) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of ants for a fleet of `rake_count` rakes.
    pub fn ant_count(&self, rake_count: usize) -> usize {
        self.min_ants.max(rake_count)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AcoResult<()> {
        if !self.pheromone_strength.is_finite() || self.pheromone_strength <= 0.0 {
            return Err(invalid(format!(
                "pheromone_strength must be positive, got {}",
                self.pheromone_strength
            )));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(invalid(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            )));
        }
        if self.iterations == 0 {
            return Err(invalid("iterations must be positive".to_string()));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(invalid(format!("alpha must be non-negative, got {}", self.alpha)));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(invalid(format!("beta must be non-negative, got {}", self.beta)));
        }
        if self.min_ants == 0 {
            return Err(invalid("min_ants must be positive".to_string()));
        }
        if !self.unknown_distance.is_finite() || self.unknown_distance <= 0.0 {
            return Err(invalid(format!(
                "unknown_distance must be positive, got {}",
                self.unknown_distance
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> AcoError {
    AcoError::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 2.5).abs() < 1e-10);
        assert_eq!(config.min_ants, 10);
        assert_eq!(config.selection, SelectionRule::ArgMax);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_run_params() {
        let config = AcoConfig::from(RunParams {
            pheromone_strength: 1.5,
            evaporation_rate: 0.5,
            iterations: 3,
        });
        assert!((config.pheromone_strength - 1.5).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.5).abs() < 1e-10);
        assert_eq!(config.iterations, 3);
        assert_eq!(config.unknown_distance, DEFAULT_UNKNOWN_DISTANCE);
    }

    #[test]
    fn test_ant_count() {
        let config = AcoConfig::default();
        assert_eq!(config.ant_count(3), 10);
        assert_eq!(config.ant_count(25), 25);
    }

    #[test]
    fn test_validate_iterations() {
        let config = AcoConfig::default().with_iterations(0);
        assert!(matches!(config.validate(), Err(AcoError::InvalidConfig(_))));
    }

    fn is_valid(config: AcoConfig) -> bool {
        config.validate().is_ok()
    }

    #[test]
    fn test_validate_evaporation_rate() {
        assert!(!is_valid(AcoConfig::default().with_evaporation_rate(-0.1)));
        assert!(!is_valid(AcoConfig::default().with_evaporation_rate(1.1)));
        assert!(!is_valid(AcoConfig::default().with_evaporation_rate(f64::NAN)));
        assert!(is_valid(AcoConfig::default().with_evaporation_rate(0.0)));
        assert!(is_valid(AcoConfig::default().with_evaporation_rate(1.0)));
    }

    #[test]
    fn test_validate_pheromone_strength() {
        assert!(!is_valid(AcoConfig::default().with_pheromone_strength(0.0)));
        assert!(!is_valid(AcoConfig::default().with_pheromone_strength(-2.0)));
        assert!(!is_valid(AcoConfig::default().with_pheromone_strength(f64::INFINITY)));
    }

    #[test]
    fn test_validate_exponents_and_sentinel() {
        assert!(!is_valid(AcoConfig::default().with_alpha(-1.0)));
        assert!(!is_valid(AcoConfig::default().with_beta(f64::NAN)));
        assert!(!is_valid(AcoConfig::default().with_min_ants(0)));
        assert!(!is_valid(AcoConfig::default().with_unknown_distance(0.0)));
    }
}
