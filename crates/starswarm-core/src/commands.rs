//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::StrafeDir;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new mission.
    StartMission,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Latch the fighter's strafe direction.
    SetStrafe { dir: StrafeDir },
    /// Send one in-formation enemy on an attack run immediately.
    TriggerDive,
}
