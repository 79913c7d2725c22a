//! Snapshot system: queries the ECS world and builds a complete GameSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use starswarm_core::components::*;
use starswarm_core::enums::GamePhase;
use starswarm_core::events::SimEvent;
use starswarm_core::state::*;
use starswarm_core::types::{Position, SimTime};
use starswarm_flight::PathState;

/// Build a complete GameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<SimEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        fighter: build_fighter(world),
        enemies: build_enemies(world),
        events,
    }
}

fn build_fighter(world: &World) -> FighterView {
    world
        .query::<(&Fighter, &Position, &StrafeIntent)>()
        .iter()
        .next()
        .map(|(_, (_, pos, intent))| FighterView {
            position: *pos,
            strafe: intent.dir,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &MovementStatus, &PathState)>()
        .iter()
        .map(|(_, (enemy, status, path))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: path.position(),
            heading: path.heading(),
            state: status.state,
            in_formation: status.state.in_formation(),
            goal_reached: path.goal_reached(),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}
