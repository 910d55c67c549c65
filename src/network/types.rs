//! Route model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AcoError, AcoResult};

/// A rail route: an ordered sequence of stations with a total distance.
///
/// The distance is assumed to be spread evenly over the gaps between
/// consecutive stations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    /// Unique route identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Station names in travel order.
    pub stations: Vec<String>,
    /// Total distance from the first to the last station.
    pub distance: f64,
}

impl Route {
    /// Creates a route over the given stations.
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        stations: impl IntoIterator<Item = S>,
        distance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            stations: stations.into_iter().map(Into::into).collect(),
            distance,
        }
    }

    /// Sets the route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of gaps between consecutive stations.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Distance covered by a single hop.
    pub fn hop_distance(&self) -> f64 {
        self.distance / self.hop_count() as f64
    }

    /// Position of the first occurrence of `station` on this route.
    pub fn position(&self, station: &str) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }

    /// Checks that the route can be used for distance interpolation.
    pub fn validate(&self) -> AcoResult<()> {
        if self.stations.len() < 2 {
            return Err(AcoError::InvalidRoute {
                route: self.id.clone(),
                reason: format!("needs at least 2 stations, got {}", self.stations.len()),
            });
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(AcoError::InvalidRoute {
                route: self.id.clone(),
                reason: format!(
                    "distance must be finite and non-negative, got {}",
                    self.distance
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_distance() {
        let route = Route::new("R1", ["A", "B", "C", "D"], 300.0);
        assert_eq!(route.hop_count(), 3);
        assert!((route.hop_distance() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_with_name() {
        let route = Route::new("R1", ["Mumbai Central", "Vadodara"], 392.0)
            .with_name("Mumbai-Delhi Express Route");
        assert_eq!(route.name, "Mumbai-Delhi Express Route");
        assert_eq!(route.id, "R1");
        assert!(Route::new("R2", ["A", "B"], 1.0).name.is_empty());
    }

    #[test]
    fn test_position_first_occurrence() {
        let route = Route::new("loop", ["A", "B", "A"], 20.0);
        assert_eq!(route.position("A"), Some(0));
        assert_eq!(route.position("B"), Some(1));
        assert_eq!(route.position("Z"), None);
    }

    #[test]
    fn test_validate_short_route() {
        let route = Route::new("R1", ["A"], 10.0);
        assert!(matches!(
            route.validate(),
            Err(AcoError::InvalidRoute { .. })
        ));
    }

    #[test]
    fn test_validate_bad_distance() {
        assert!(Route::new("R1", ["A", "B"], -1.0).validate().is_err());
        assert!(Route::new("R1", ["A", "B"], f64::NAN).validate().is_err());
        assert!(Route::new("R1", ["A", "B"], 0.0).validate().is_ok());
    }
}
