//! Station set and pairwise distance resolution.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::Route;
use crate::error::AcoResult;

/// Distance charged when neither station appears on any route.
pub const DEFAULT_UNKNOWN_DISTANCE: f64 = 500.0;

/// How to approximate the distance between two stations that never
/// appear together on a single route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FallbackDistance {
    /// Minimum over every route touching either station of
    /// `hop_distance * station_count`.
    ///
    /// The result does not depend on where the stations sit on their
    /// routes.
    #[default]
    RouteSpan,

    /// Shortest path with at most one change of route, via a station
    /// shared by a route of each endpoint. Falls back to [`RouteSpan`]
    /// when no such interchange exists or one endpoint is off-network.
    ///
    /// [`RouteSpan`]: FallbackDistance::RouteSpan
    SingleTransfer,
}

/// The deduplicated station set plus a distance resolver over the routes.
///
/// Immutable after construction; every lookup is a pure function of the
/// route set.
#[derive(Debug, Clone)]
pub struct StationGraph {
    routes: Vec<Route>,
    /// Stations in first-seen order across all routes.
    stations: Vec<String>,
    /// Station -> (route index, first position on that route), ascending by route.
    positions: HashMap<String, Vec<(usize, usize)>>,
    fallback: FallbackDistance,
    unknown_distance: f64,
}

impl StationGraph {
    /// Builds the graph, rejecting routes that cannot be interpolated.
    pub fn new(routes: Vec<Route>) -> AcoResult<Self> {
        for route in &routes {
            route.validate()?;
        }

        let mut stations = Vec::new();
        let mut positions: HashMap<String, Vec<(usize, usize)>> = HashMap::new();

        for (r, route) in routes.iter().enumerate() {
            for (i, station) in route.stations.iter().enumerate() {
                let entry = positions.entry(station.clone()).or_insert_with(|| {
                    stations.push(station.clone());
                    Vec::new()
                });
                // Only the first occurrence on each route counts.
                if entry.last().is_none_or(|&(last, _)| last != r) {
                    entry.push((r, i));
                }
            }
        }

        Ok(Self {
            routes,
            stations,
            positions,
            fallback: FallbackDistance::default(),
            unknown_distance: DEFAULT_UNKNOWN_DISTANCE,
        })
    }

    /// Sets the approximation used for stations without a common route.
    pub fn with_fallback(mut self, fallback: FallbackDistance) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the sentinel distance for off-network stations.
    pub fn with_unknown_distance(mut self, distance: f64) -> Self {
        self.unknown_distance = distance;
        self
    }

    /// Sentinel distance for off-network stations.
    pub fn unknown_distance(&self) -> f64 {
        self.unknown_distance
    }

    /// All distinct stations, in first-seen order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// The routes this graph was built from.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Whether `station` appears on any route.
    pub fn contains(&self, station: &str) -> bool {
        self.positions.contains_key(station)
    }

    /// Travel distance between two stations.
    ///
    /// - Identical names: 0.
    /// - Both on a common route: linear interpolation along the first
    ///   such route.
    /// - Otherwise: the configured [`FallbackDistance`].
    /// - Neither on any route: the unknown-distance sentinel.
    pub fn distance(&self, from: &str, to: &str) -> f64 {
        if from == to {
            return 0.0;
        }

        let empty = Vec::new();
        let on_from = self.positions.get(from).unwrap_or(&empty);
        let on_to = self.positions.get(to).unwrap_or(&empty);

        for &(r, i) in on_from {
            if let Some(&(_, j)) = on_to.iter().find(|&&(rt, _)| rt == r) {
                return self.along(r, i, j);
            }
        }

        if on_from.is_empty() && on_to.is_empty() {
            return self.unknown_distance;
        }

        match self.fallback {
            FallbackDistance::RouteSpan => self.route_span(on_from, on_to),
            FallbackDistance::SingleTransfer => self
                .single_transfer(on_from, on_to)
                .unwrap_or_else(|| self.route_span(on_from, on_to)),
        }
    }

    /// Distance between two positions on route `r`.
    fn along(&self, r: usize, i: usize, j: usize) -> f64 {
        self.routes[r].hop_distance() * i.abs_diff(j) as f64
    }

    fn route_span(&self, on_from: &[(usize, usize)], on_to: &[(usize, usize)]) -> f64 {
        on_from
            .iter()
            .chain(on_to)
            .map(|&(r, _)| {
                let route = &self.routes[r];
                route.hop_distance() * route.stations.len() as f64
            })
            .fold(f64::INFINITY, f64::min)
    }

    fn single_transfer(
        &self,
        on_from: &[(usize, usize)],
        on_to: &[(usize, usize)],
    ) -> Option<f64> {
        let mut best: Option<f64> = None;
        for &(ra, ia) in on_from {
            for &(rb, ib) in on_to {
                for (ta, interchange) in self.routes[ra].stations.iter().enumerate() {
                    let Some(tb) = self.routes[rb].position(interchange) else {
                        continue;
                    };
                    let d = self.along(ra, ia, ta) + self.along(rb, tb, ib);
                    if best.is_none_or(|b| d < b) {
                        best = Some(d);
                    }
                }
            }
        }
        best
    }
}
