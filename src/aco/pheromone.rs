//! Pheromone trails between ordered station pairs.

use std::collections::{BTreeMap, HashMap};

/// Trail strengths keyed by ordered `(from, to)` station pairs.
///
/// Reads of a missing pair return the base strength, and deposits onto a
/// missing pair start from it, so absence is never an error. Trails are
/// only ever decayed, never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneStore {
    base: f64,
    trails: HashMap<String, HashMap<String, f64>>,
}

impl PheromoneStore {
    /// Creates an empty store with the given base strength.
    pub fn new(base: f64) -> Self {
        Self {
            base,
            trails: HashMap::new(),
        }
    }

    /// Creates a store with a uniform trail for every ordered pair of
    /// distinct stations.
    pub fn initialize(base: f64, stations: &[String]) -> Self {
        let mut store = Self::new(base);
        for from in stations {
            let row = store.trails.entry(from.clone()).or_default();
            for to in stations {
                if from != to {
                    row.insert(to.clone(), base);
                }
            }
        }
        store
    }

    /// The base strength used for unknown pairs.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Trail strength from `from` to `to`.
    pub fn get(&self, from: &str, to: &str) -> f64 {
        self.trails
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(self.base)
    }

    /// Whether a trail is stored for the pair.
    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.trails.get(from).is_some_and(|row| row.contains_key(to))
    }

    /// Number of stored trails.
    pub fn len(&self) -> usize {
        self.trails.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Multiplies every stored trail by `1 - rate`.
    ///
    /// `rate` must lie in [0, 1]; callers validate it up front.
    pub fn evaporate_all(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for value in self.trails.values_mut().flat_map(HashMap::values_mut) {
            *value *= keep;
        }
    }

    /// Adds `amount` to the trail, starting from the base strength if the
    /// pair is new.
    pub fn deposit(&mut self, from: &str, to: &str, amount: f64) {
        let base = self.base;
        let value = self
            .trails
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_insert(base);
        *value += amount;
    }

    /// Copy of every trail keyed by [`trail_key`], sorted by key.
    ///
    /// Holds exactly one entry per stored trail.
    pub fn snapshot(&self) -> BTreeMap<String, f64> {
        self.trails
            .iter()
            .flat_map(|(from, row)| {
                row.iter()
                    .map(move |(to, &value)| (trail_key(from, to), value))
            })
            .collect()
    }
}

/// Snapshot key for an ordered station pair: `"from-to"`.
///
/// Backslashes and hyphens inside a station name are escaped with a
/// backslash, so distinct pairs always map to distinct keys. Names without
/// either character appear verbatim.
pub fn trail_key(from: &str, to: &str) -> String {
    let mut key = String::with_capacity(from.len() + to.len() + 1);
    push_escaped(&mut key, from);
    key.push('-');
    push_escaped(&mut key, to);
    key
}

fn push_escaped(key: &mut String, name: &str) {
    for c in name.chars() {
        if c == '-' || c == '\\' {
            key.push('\\');
        }
        key.push(c);
    }
}
