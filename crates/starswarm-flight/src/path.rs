//! Time-indexed path evaluator.
//!
//! `PathState` is the per-actor path bookkeeping: the installed waypoint
//! set, its solved coefficients (spline legs only), elapsed path-time `ut`,
//! and the derived position, heading, and goal-reached flag.

use std::f64::consts::FRAC_PI_2;

use starswarm_core::constants::NEUTRAL_HEADING;
use starswarm_core::types::Position;

use crate::error::PathError;
use crate::spline::{self, SegmentTable};
use crate::waypoint::WaypointSet;

#[derive(Debug, Clone)]
pub struct PathState {
    set: WaypointSet,
    /// Solved coefficients; `None` for two-waypoint linear legs.
    table: Option<SegmentTable>,
    /// Elapsed path-time since this set was installed.
    ut: f64,
    x: f64,
    y: f64,
    heading: f64,
    goal_reached: bool,
}

impl PathState {
    /// Install a waypoint set, solving spline coefficients if needed.
    /// Position starts at the first waypoint; `ut` resets to 0.
    pub fn new(set: WaypointSet) -> Result<Self, PathError> {
        let table = if set.is_linear() {
            None
        } else {
            Some(spline::solve(&set)?)
        };
        let first = *set.first();
        Ok(Self {
            set,
            table,
            ut: 0.0,
            x: first.x,
            y: first.y,
            heading: NEUTRAL_HEADING,
            goal_reached: false,
        })
    }

    /// Advance path-time and re-evaluate position and heading.
    pub fn advance(&mut self, elapsed_secs: f64) {
        self.ut += elapsed_secs;
        self.evaluate();
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Elapsed path-time since the current set was installed.
    pub fn elapsed(&self) -> f64 {
        self.ut
    }

    /// Set once `ut` passes the final waypoint's time; cleared only by
    /// installing a new path.
    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    pub fn waypoints(&self) -> &WaypointSet {
        &self.set
    }

    pub fn is_linear(&self) -> bool {
        self.table.is_none()
    }

    /// Map `ut` into the active segment and evaluate it.
    ///
    /// Past the final waypoint the position clamps to the terminal sample;
    /// the goal-reached flag is raised at that instant, not before.
    fn evaluate(&mut self) {
        let duration = self.set.duration();
        if self.ut >= duration {
            self.goal_reached = true;
        }
        let t = self.ut.min(duration);

        let pts = self.set.points();
        for i in 1..pts.len() {
            if pts[i].t >= t {
                let tau = (t - pts[i - 1].t) / (pts[i].t - pts[i - 1].t);
                let (new_x, new_y) = match &self.table {
                    Some(table) => table.position(i - 1, tau),
                    None => (
                        pts[i - 1].x + tau * (pts[i].x - pts[i - 1].x),
                        pts[i - 1].y + tau * (pts[i].y - pts[i - 1].y),
                    ),
                };

                // Heading points along the direction of motion, offset a
                // quarter turn for the sprite nose convention. Hold the old
                // heading when the actor did not move this evaluation.
                let dx = self.x - new_x;
                let dy = self.y - new_y;
                if dx != 0.0 || dy != 0.0 {
                    self.heading = dy.atan2(dx) + FRAC_PI_2;
                }

                self.x = new_x;
                self.y = new_y;
                break;
            }
        }

        // Formation legs do not bank: neutral orientation after evaluation.
        if self.table.is_none() {
            self.heading = NEUTRAL_HEADING;
        }
    }
}
