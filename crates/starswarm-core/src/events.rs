//! Events emitted by the simulation for UI feedback and tests.

use serde::{Deserialize, Serialize};

/// Notable things that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A wave of entering enemies was released.
    WaveSpawned { count: u32 },
    /// An enemy started an attack run.
    DiveStarted { enemy_id: u32 },
    /// A formation phase-sync broadcast re-timed the listed number of peers.
    FormationSynced { leader_id: u32, followers: u32 },
}
