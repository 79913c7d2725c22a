//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Marker + identity for an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable id assigned at spawn, used for snapshot ordering.
    pub id: u32,
    pub kind: EnemyKind,
}

/// An enemy's nominal formation slot, fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HomeSlot {
    pub home: Position,
}

/// The entry pattern this enemy flew in on (reused if it respawns).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntryPattern {
    pub pattern: FlightPattern,
}

/// Current movement state of an enemy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementStatus {
    pub state: MovementState,
}

/// Marker for the player-controlled fighter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fighter;

/// The fighter's latched strafe intent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StrafeIntent {
    pub dir: StrafeDir,
}
