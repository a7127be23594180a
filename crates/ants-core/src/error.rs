//! Invariant-violation error type.
//!
//! Every variant describes a programming error or an invalid configuration,
//! never a recoverable runtime condition.  Constructors reject bad values
//! instead of clamping them.

use thiserror::Error;

use crate::WorldPosition;

/// The base error type for `ants-core` and a common source for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("orientation {0} is outside [0, 360)")]
    Orientation(f32),

    #[error("turn {0} is outside (-360, 360)")]
    Turn(f32),

    #[error("distance {0} is negative or not a number")]
    Distance(f32),

    #[error("pheromone strength {0} is outside [0, 1]")]
    Strength(f32),

    #[error("probability {0} is outside [0, 1]")]
    Probability(f32),

    #[error("cannot compute a bearing between identical points {0}")]
    IdenticalPoints(WorldPosition),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ants-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
