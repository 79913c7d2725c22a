//! Path creation errors.
//!
//! Every variant denotes a logic error in a template or an ill-conditioned
//! solve, not a runtime condition to recover from. Callers reject the new
//! path and keep the previous one.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("a path needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("the first waypoint must be at t = 0, got t = {0}")]
    StartTimeNotZero(f64),

    #[error("waypoint times must be strictly increasing (violated at index {0})")]
    NonIncreasingTime(usize),

    #[error("spline system is singular, path creation aborted")]
    SingularSystem,

    #[error("spline solve produced non-finite coefficients")]
    NonFiniteCoefficients,
}
