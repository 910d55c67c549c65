//! Rake and train records.
//!
//! Both are read-only snapshots from the optimizer's point of view.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rake: a reusable set of coaches that can be sent to a train.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rake {
    /// Unique rake identifier.
    pub id: String,
    /// Display number (e.g. "RK-2401").
    pub number: String,
    /// Coach type (e.g. "LHB Coach").
    pub kind: String,
    /// Passenger or cargo capacity.
    pub capacity: u32,
    /// Operational status.
    pub status: RakeStatus,
    /// Station the rake currently stands at.
    pub location: String,
    /// Whether the rake already carries a payload.
    pub is_loaded: bool,
    /// Train the rake is attached to, if any.
    pub assigned_train: Option<String>,
}

/// Operational status of a rake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RakeStatus {
    /// Idle and ready for allocation.
    #[default]
    Available,
    /// Moving between stations.
    InTransit,
    /// Out of service.
    Maintenance,
    /// Attached to a train by an allocation.
    Assigned,
    /// Operator-specific status.
    Other(String),
}

impl Rake {
    /// Creates an available, unloaded rake at `location`.
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            number: id.clone(),
            id,
            kind: String::new(),
            capacity: 0,
            status: RakeStatus::Available,
            location: location.into(),
            is_loaded: false,
            assigned_train: None,
        }
    }

    /// Sets the display number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the coach type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the operational status.
    pub fn with_status(mut self, status: RakeStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the rake as loaded or empty.
    pub fn with_loaded(mut self, loaded: bool) -> Self {
        self.is_loaded = loaded;
        self
    }
}

/// A train waiting for a rake at its current station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Train {
    /// Unique train identifier.
    pub id: String,
    /// Display number (e.g. "12951").
    pub number: String,
    /// Human-readable name.
    pub name: String,
    /// Route the train runs on.
    pub route: String,
    /// Station where the train needs a rake.
    pub station: String,
}

impl Train {
    /// Creates a train waiting at `station`.
    pub fn new(id: impl Into<String>, station: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            number: id.clone(),
            id,
            name: String::new(),
            route: String::new(),
            station: station.into(),
        }
    }

    /// Sets the display number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the route affiliation.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rake_defaults() {
        let rake = Rake::new("r1", "Vadodara");
        assert_eq!(rake.number, "r1");
        assert_eq!(rake.status, RakeStatus::Available);
        assert!(!rake.is_loaded);
        assert!(rake.assigned_train.is_none());
    }

    #[test]
    fn test_rake_builder() {
        let rake = Rake::new("r2", "Surat")
            .with_number("RK-2402")
            .with_kind("LHB Coach")
            .with_capacity(80)
            .with_status(RakeStatus::InTransit)
            .with_loaded(true);
        assert_eq!(rake.number, "RK-2402");
        assert_eq!(rake.capacity, 80);
        assert_eq!(rake.status, RakeStatus::InTransit);
        assert!(rake.is_loaded);
    }

    #[test]
    fn test_train_builder() {
        let train = Train::new("t1", "Vadodara")
            .with_number("12951")
            .with_name("Mumbai Rajdhani")
            .with_route("Mumbai-Delhi");
        assert_eq!(train.number, "12951");
        assert_eq!(train.station, "Vadodara");
        assert_eq!(train.route, "Mumbai-Delhi");
    }
}
