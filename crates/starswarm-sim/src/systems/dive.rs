//! Dive scheduling system.
//!
//! Launches attack runs: a periodic timer (plus any queued TriggerDive
//! commands) picks a random in-formation enemy and sends it toward the
//! fighter's position, sampled once at launch.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starswarm_core::components::{Enemy, Fighter, MovementStatus};
use starswarm_core::constants::*;
use starswarm_core::enums::MovementState;
use starswarm_core::events::SimEvent;
use starswarm_core::types::Position;
use starswarm_flight::fsm;
use starswarm_flight::PathState;

/// Ticks between automatic dive launches.
pub fn interval_ticks() -> u64 {
    (DIVE_INTERVAL_SECS * TICK_RATE as f64) as u64
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    pending_dives: &mut u32,
    next_dive_tick: &mut u64,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
) {
    if current_tick >= *next_dive_tick {
        *pending_dives += 1;
        *next_dive_tick = current_tick + interval_ticks();
    }
    if *pending_dives == 0 {
        return;
    }

    // One-shot read of the tracked target's position.
    let target = match fighter_position(world) {
        Some(pos) => pos,
        None => {
            *pending_dives = 0;
            return;
        }
    };

    while *pending_dives > 0 {
        let eligible: Vec<(Entity, u32)> = world
            .query_mut::<(&Enemy, &MovementStatus)>()
            .into_iter()
            .filter(|(_, (_, status))| status.state.in_formation())
            .map(|(entity, (enemy, _))| (entity, enemy.id))
            .collect();

        if eligible.is_empty() {
            // Nobody home to dive; drop the request rather than stockpile.
            *pending_dives = 0;
            return;
        }

        let (entity, enemy_id) = eligible[rng.gen_range(0..eligible.len())];
        launch_dive(world, entity, enemy_id, target, events);
        *pending_dives -= 1;
    }
}

fn fighter_position(world: &mut World) -> Option<Position> {
    world
        .query_mut::<(&Fighter, &Position)>()
        .into_iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

fn launch_dive(
    world: &mut World,
    entity: Entity,
    enemy_id: u32,
    target: Position,
    events: &mut Vec<SimEvent>,
) {
    let Ok((status, path)) = world
        .query_one_mut::<(&mut MovementStatus, &mut PathState)>(entity)
    else {
        return;
    };

    match fsm::begin_dive(path.position(), target) {
        Ok(new_path) => {
            status.state = MovementState::Dive;
            *path = new_path;
            events.push(SimEvent::DiveStarted { enemy_id });
        }
        // Keep the previous path and state on a failed solve.
        Err(err) => log::warn!("enemy {} dive path rejected: {}", enemy_id, err),
    }
}
