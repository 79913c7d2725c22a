//! Formation phase synchronization.
//!
//! When an enemy completes its entry path it becomes the phase leader: every
//! peer not currently diving adopts the leader's state and regenerates its
//! own formation leg with a shortened duration, so the whole group completes
//! cycle legs at the same instant thereafter. Invoked once per sync event,
//! not continuously.

use starswarm_core::constants::{DT, FORMATION_CYCLE_TIME};
use starswarm_core::enums::MovementState;
use starswarm_core::types::Position;

use crate::error::PathError;
use crate::path::PathState;
use crate::patterns;

/// One-shot snapshot of the leader at the sync instant.
#[derive(Debug, Clone, Copy)]
pub struct LeaderSnapshot {
    pub state: MovementState,
    /// Leader's elapsed path-time in its current formation leg.
    pub elapsed: f64,
}

/// Remaining time until the leader completes its current leg, clamped to
/// `[0, FORMATION_CYCLE_TIME]`.
pub fn time_to_goal(leader_elapsed: f64) -> f64 {
    (FORMATION_CYCLE_TIME - leader_elapsed).clamp(0.0, FORMATION_CYCLE_TIME)
}

/// Re-phase one follower to the leader: adopt its state and build a
/// formation leg that arrives when the leader's leg completes.
///
/// A leader past its own goal yields a zero-length window; that leg is
/// floored at one tick so the follower still observably arrives.
pub fn synchronize(
    leader: &LeaderSnapshot,
    position: Position,
    home: Position,
) -> Result<(MovementState, PathState), PathError> {
    let state = if leader.state.in_formation() {
        leader.state
    } else {
        MovementState::FormationOut
    };
    let duration = time_to_goal(leader.elapsed).max(DT);
    let path = PathState::new(patterns::formation_leg(position, home, state, duration)?)?;
    Ok((state, path))
}
