//! Waypoint data model.

use starswarm_core::types::Position;

use crate::error::PathError;

/// A single path sample: the curve must pass through (x, y) at time t.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    /// Path-time of arrival in seconds. t = 0 for the first sample.
    pub t: f64,
}

impl Waypoint {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// An ordered sequence of at least two waypoints with strictly increasing
/// times, starting at t = 0. Two waypoints denote a linear leg; three or
/// more denote a spline leg requiring solved coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointSet {
    points: Vec<Waypoint>,
}

impl WaypointSet {
    /// Validate and wrap a list of waypoints.
    pub fn new(points: Vec<Waypoint>) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooFewWaypoints(points.len()));
        }
        if points[0].t != 0.0 {
            return Err(PathError::StartTimeNotZero(points[0].t));
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].t <= pair[0].t {
                return Err(PathError::NonIncreasingTime(i + 1));
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// A two-waypoint set is traversed as a straight constant-velocity leg.
    pub fn is_linear(&self) -> bool {
        self.points.len() == 2
    }

    /// Number of polynomial segments (waypoints − 1).
    pub fn segments(&self) -> usize {
        self.points.len() - 1
    }

    pub fn first(&self) -> &Waypoint {
        &self.points[0]
    }

    pub fn last(&self) -> &Waypoint {
        &self.points[self.points.len() - 1]
    }

    /// Total traversal time: the last waypoint's t.
    pub fn duration(&self) -> f64 {
        self.last().t
    }
}
