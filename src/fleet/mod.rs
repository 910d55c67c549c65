//! Rolling stock and demand records.
//!
//! - [`Rake`]: a movable resource unit with a location and load state
//! - [`Train`]: a demand for a rake at a station
//! - [`apply_allocations`]: folds an optimization result back onto rakes

mod apply;
mod types;

pub use apply::apply_allocations;
pub use types::{Rake, RakeStatus, Train};
