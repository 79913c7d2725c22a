//! Enemy flight system.
//!
//! Per tick, for every enemy: apply any state transition owed from the
//! previous evaluation's goal-reached flag (installing the freshly built
//! replacement path), then advance the path by one tick. Entry completions
//! are collected and broadcast as formation sync events afterward.

use hecs::{Entity, World};

use starswarm_core::components::{Enemy, HomeSlot, MovementStatus};
use starswarm_core::constants::DT;
use starswarm_core::enums::MovementState;
use starswarm_core::events::SimEvent;
use starswarm_flight::fsm::{self, FlightContext};
use starswarm_flight::sync::{self, LeaderSnapshot};
use starswarm_flight::PathState;

pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    let mut leaders: Vec<(Entity, u32)> = Vec::new();

    for (entity, (enemy, status, slot, path)) in
        world.query_mut::<(&Enemy, &mut MovementStatus, &HomeSlot, &mut PathState)>()
    {
        let ctx = FlightContext {
            state: status.state,
            goal_reached: path.goal_reached(),
            position: path.position(),
            home: slot.home,
        };

        match fsm::evaluate(&ctx) {
            Ok(update) => {
                if update.state_changed {
                    status.state = update.new_state;
                }
                if let Some(new_path) = update.new_path {
                    *path = new_path;
                }
                if update.wants_sync {
                    leaders.push((entity, enemy.id));
                }
            }
            // Keep the previous path and state; retried next tick.
            Err(err) => log::warn!("enemy {} path regeneration failed: {}", enemy.id, err),
        }

        path.advance(DT);
    }

    for (leader_entity, leader_id) in leaders {
        broadcast_sync(world, leader_entity, leader_id, events);
    }
}

/// Re-phase every non-diving peer to the leader's formation leg.
fn broadcast_sync(
    world: &mut World,
    leader_entity: Entity,
    leader_id: u32,
    events: &mut Vec<SimEvent>,
) {
    // One-shot read of the leader's state and elapsed leg time.
    let leader = {
        let Ok((status, path)) = world.query_one_mut::<(&MovementStatus, &PathState)>(leader_entity)
        else {
            return;
        };
        LeaderSnapshot {
            state: status.state,
            elapsed: path.elapsed(),
        }
    };

    let mut followers = 0;
    for (entity, (enemy, status, slot, path)) in
        world.query_mut::<(&Enemy, &mut MovementStatus, &HomeSlot, &mut PathState)>()
    {
        if entity == leader_entity || status.state == MovementState::Dive {
            continue;
        }
        match sync::synchronize(&leader, path.position(), slot.home) {
            Ok((state, new_path)) => {
                status.state = state;
                *path = new_path;
                followers += 1;
            }
            Err(err) => log::warn!("enemy {} formation sync failed: {}", enemy.id, err),
        }
    }

    events.push(SimEvent::FormationSynced {
        leader_id,
        followers,
    });
}
