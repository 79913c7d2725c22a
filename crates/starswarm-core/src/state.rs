//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete game state built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub fighter: FighterView,
    pub enemies: Vec<EnemyView>,
    pub events: Vec<SimEvent>,
}

/// The fighter's visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FighterView {
    pub position: Position,
    pub strafe: StrafeDir,
}

/// One enemy's visible state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Position,
    /// Heading along the direction of motion (radians).
    pub heading: f64,
    pub state: MovementState,
    pub in_formation: bool,
    pub goal_reached: bool,
}
