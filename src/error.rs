//! Error type for optimization runs.

use thiserror::Error;

/// Errors raised before an optimization run starts.
///
/// All of these are caller errors: the colony never fails midway through
/// its iterations once the inputs have been accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A route cannot be used for distance interpolation.
    #[error("invalid route `{route}`: {reason}")]
    InvalidRoute { route: String, reason: String },

    /// Two rakes share the same identifier.
    #[error("duplicate rake id `{0}`")]
    DuplicateRake(String),

    /// Two trains share the same identifier.
    #[error("duplicate train id `{0}`")]
    DuplicateTrain(String),
}

/// Result type for optimization operations.
pub type AcoResult<T> = Result<T, AcoError>;
