//! Folding allocations back onto rake records.

use std::collections::HashMap;

use super::types::{Rake, RakeStatus};
use crate::aco::Allocation;

/// Returns updated copies of `rakes` reflecting `allocations`.
///
/// A rake matched to a train becomes [`RakeStatus::Assigned`], loaded, and
/// attached to that train. Filler moves and rakes without an allocation
/// are returned unchanged. Input order is preserved.
pub fn apply_allocations(rakes: &[Rake], allocations: &[Allocation]) -> Vec<Rake> {
    let matched: HashMap<&str, &str> = allocations
        .iter()
        .filter_map(|a| a.train_id.as_deref().map(|t| (a.rake_id.as_str(), t)))
        .collect();

    rakes
        .iter()
        .map(|rake| match matched.get(rake.id.as_str()) {
            Some(&train) => Rake {
                status: RakeStatus::Assigned,
                is_loaded: true,
                assigned_train: Some(train.to_string()),
                ..rake.clone()
            },
            None => rake.clone(),
        })
        .collect()
}
