//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the fighter and enemy entities with appropriate component
//! bundles, and derives the formation grid from the row layout constants.

use hecs::World;

use starswarm_core::components::*;
use starswarm_core::constants::*;
use starswarm_core::enums::{EnemyKind, FlightPattern};
use starswarm_core::types::Position;
use starswarm_flight::fsm;

/// One formation slot: the enemy kind that occupies it and its home position.
#[derive(Debug, Clone, Copy)]
pub struct FormationSlot {
    pub kind: EnemyKind,
    pub home: Position,
}

/// The full formation grid, row-major from the boss row down. Columns are
/// spaced by ENEMY_BUFFER and centered on x = 0.
pub fn formation_slots() -> Vec<FormationSlot> {
    let mut slots = Vec::new();
    for (row, &count) in ROW_SLOTS.iter().enumerate() {
        let kind = EnemyKind::for_row(row);
        let y = ROW_Y[row];
        for col in 0..count {
            let x = (col as f64 - (count - 1) as f64 / 2.0) * ENEMY_BUFFER;
            slots.push(FormationSlot {
                kind,
                home: Position::new(x, y),
            });
        }
    }
    slots
}

/// Spawn the player's fighter at the bottom center of the world.
pub fn spawn_fighter(world: &mut World) -> hecs::Entity {
    world.spawn((
        Fighter,
        Position::new(0.0, FIGHTER_Y),
        StrafeIntent::default(),
    ))
}

/// Spawn one enemy on its entry path from `start` toward its home slot.
///
/// Returns `None` (and logs) if the entry path fails to build; the enemy
/// is simply not spawned in that case.
pub fn spawn_enemy(
    world: &mut World,
    id: u32,
    slot: FormationSlot,
    pattern: FlightPattern,
    start: Position,
) -> Option<hecs::Entity> {
    let path = match fsm::entry_path(pattern, start, slot.home) {
        Ok(path) => path,
        Err(err) => {
            log::warn!("enemy {} entry path rejected: {}", id, err);
            return None;
        }
    };
    Some(world.spawn((
        Enemy {
            id,
            kind: slot.kind,
        },
        HomeSlot { home: slot.home },
        EntryPattern { pattern },
        MovementStatus::default(),
        path,
    )))
}
