//! Enemy movement finite state machine.
//!
//! Pure functions that compute state transitions and the replacement path
//! for enemy entities based on their current state and whether the active
//! path's goal has been reached. No ECS dependency — operates on plain data.

use starswarm_core::constants::FORMATION_CYCLE_TIME;
use starswarm_core::enums::{FlightPattern, MovementState};
use starswarm_core::types::Position;

use crate::error::PathError;
use crate::path::PathState;
use crate::patterns;

/// Input to the movement FSM for a single enemy.
pub struct FlightContext {
    pub state: MovementState,
    pub goal_reached: bool,
    pub position: Position,
    pub home: Position,
}

/// Output from the movement FSM.
pub struct FlightUpdate {
    pub new_state: MovementState,
    /// Replacement path to install, if the transition created one.
    pub new_path: Option<PathState>,
    pub state_changed: bool,
    /// The ASSUME_POSITION completion makes this enemy the phase leader;
    /// the caller must broadcast one formation sync to its peers.
    pub wants_sync: bool,
}

/// Evaluate the FSM for one enemy, once per tick after path evaluation.
///
/// Transitions fire only on a reached goal. Every transition installs a
/// fresh path built in the same tick, so position data is valid immediately
/// after the state change.
pub fn evaluate(ctx: &FlightContext) -> Result<FlightUpdate, PathError> {
    if !ctx.goal_reached {
        return Ok(FlightUpdate {
            new_state: ctx.state,
            new_path: None,
            state_changed: false,
            wants_sync: false,
        });
    }

    match ctx.state {
        // Entry complete: become the phase leader for the formation.
        MovementState::AssumePosition => {
            let path = formation_path(ctx, MovementState::FormationOut)?;
            Ok(FlightUpdate {
                new_state: MovementState::FormationOut,
                new_path: Some(path),
                state_changed: true,
                wants_sync: true,
            })
        }
        // Attack run over: rejoin the cycle from wherever the dive ended.
        MovementState::Dive => {
            let path = formation_path(ctx, MovementState::FormationOut)?;
            Ok(FlightUpdate {
                new_state: MovementState::FormationOut,
                new_path: Some(path),
                state_changed: true,
                wants_sync: false,
            })
        }
        MovementState::FormationOut => {
            let path = formation_path(ctx, MovementState::FormationIn)?;
            Ok(FlightUpdate {
                new_state: MovementState::FormationIn,
                new_path: Some(path),
                state_changed: true,
                wants_sync: false,
            })
        }
        MovementState::FormationIn => {
            let path = formation_path(ctx, MovementState::FormationOut)?;
            Ok(FlightUpdate {
                new_state: MovementState::FormationOut,
                new_path: Some(path),
                state_changed: true,
                wants_sync: false,
            })
        }
    }
}

/// Build the entry path flown at spawn: from the spawn point to the home
/// slot along the named pattern.
pub fn entry_path(
    pattern: FlightPattern,
    start: Position,
    goal: Position,
) -> Result<PathState, PathError> {
    PathState::new(patterns::entry_points(pattern, start, goal)?)
}

/// Build an attack path toward the target's position, sampled once at
/// invocation time. The external dive trigger enters through here.
pub fn begin_dive(start: Position, target: Position) -> Result<PathState, PathError> {
    PathState::new(patterns::dive_points(start, target)?)
}

fn formation_path(ctx: &FlightContext, state: MovementState) -> Result<PathState, PathError> {
    PathState::new(patterns::formation_leg(
        ctx.position,
        ctx.home,
        state,
        FORMATION_CYCLE_TIME,
    )?)
}
