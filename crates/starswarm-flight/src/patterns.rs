//! Named path templates.
//!
//! Pure functions of (start, goal, [duration]): they read nothing from the
//! actor beyond the parameters and mutate nothing. Interior waypoints are
//! fixed arithmetic combinations of start, goal, and the world dimensions.

use starswarm_core::constants::*;
use starswarm_core::enums::{FlightPattern, MovementState};
use starswarm_core::types::Position;

use crate::error::PathError;
use crate::waypoint::{Waypoint, WaypointSet};

/// Waypoints for one of the named entry patterns, from the spawn point to
/// the formation slot.
pub fn entry_points(
    pattern: FlightPattern,
    start: Position,
    goal: Position,
) -> Result<WaypointSet, PathError> {
    let (x, y) = (start.x, start.y);
    let points = match pattern {
        // Cross the field twice, then settle at the slot.
        FlightPattern::DoubleCross => vec![
            Waypoint::new(x, y, 0.0),
            Waypoint::new(0.0, WORLD_HEIGHT / 2.0, 1.0),
            Waypoint::new(-x, WORLD_HEIGHT / 3.0, 1.5),
            Waypoint::new(-x, WORLD_HEIGHT / 2.0, 2.0),
            Waypoint::new(goal.x, goal.y, 3.0),
        ],
        // Loop up from the bottom of the field.
        FlightPattern::BottomLoop => vec![
            Waypoint::new(x, y, 0.0),
            Waypoint::new(x / 10.0, WORLD_HEIGHT / 3.0, 1.0),
            Waypoint::new(x / 6.0, 2.0 * WORLD_HEIGHT / 3.0, 1.5),
            Waypoint::new(x / 7.0, WORLD_HEIGHT / 3.0, 2.0),
            Waypoint::new(goal.x, goal.y, 3.0),
        ],
        // Loop down from the top of the field.
        FlightPattern::TopLoop => vec![
            Waypoint::new(x, y, 0.0),
            Waypoint::new(x / 2.0, WORLD_HEIGHT / 3.0, 1.0),
            Waypoint::new(0.0, WORLD_HEIGHT / 3.0, 1.5),
            Waypoint::new(goal.x, goal.y, 2.0),
        ],
    };
    WaypointSet::new(points)
}

/// Waypoints for an attack run: swing past the target's sampled position,
/// continue to the bottom edge, then return to the start of the dive.
pub fn dive_points(start: Position, target: Position) -> Result<WaypointSet, PathError> {
    let (x, y) = (start.x, start.y);
    // Tiny offset bends the opening of the dive away from the slot.
    WaypointSet::new(vec![
        Waypoint::new(x, y, 0.0),
        Waypoint::new(x + 0.05, y + 0.05, 0.5),
        Waypoint::new(target.x, target.y, 2.0),
        Waypoint::new(target.x, 0.0, 3.0),
        Waypoint::new(x, y, 4.0),
    ])
}

/// Goal position for a formation leg: the home slot scaled about the
/// boss-row height. FORMATION_IN contracts toward it, everything else
/// expands away from it.
pub fn formation_goal(home: Position, state: MovementState) -> Position {
    let factor = match state {
        MovementState::FormationIn => FORMATION_CONTRACT_FACTOR,
        _ => FORMATION_EXPAND_FACTOR,
    };
    Position::new(home.x * factor, (home.y - BOSS_Y) * factor + BOSS_Y)
}

/// Two-waypoint linear leg from the current position to the formation goal,
/// arriving after `duration` seconds.
pub fn formation_leg(
    current: Position,
    home: Position,
    state: MovementState,
    duration: f64,
) -> Result<WaypointSet, PathError> {
    let goal = formation_goal(home, state);
    WaypointSet::new(vec![
        Waypoint::new(current.x, current.y, 0.0),
        Waypoint::new(goal.x, goal.y, duration),
    ])
}
