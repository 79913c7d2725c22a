//! Trajectory engine for STARSWARM.
//!
//! Waypoint sets, the piecewise-cubic spline solver, the time-indexed
//! path evaluator, the enemy movement state machine, and formation
//! phase synchronization. No ECS dependency — operates on plain data.

pub mod error;
pub mod fsm;
pub mod path;
pub mod patterns;
pub mod spline;
pub mod sync;
pub mod waypoint;

pub use starswarm_core as core;

pub use error::PathError;
pub use path::PathState;
pub use spline::SegmentTable;
pub use waypoint::{Waypoint, WaypointSet};
