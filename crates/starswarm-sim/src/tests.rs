//! Tests for the simulation engine: determinism, wave spawning, the
//! formation lifecycle, synchronization, dives, and fighter control.

use starswarm_core::commands::PlayerCommand;
use starswarm_core::constants::*;
use starswarm_core::enums::*;
use starswarm_core::events::SimEvent;
use starswarm_core::state::GameSnapshot;
use starswarm_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};
use crate::world_setup::FormationSlot;

fn bee_slot(x: f64) -> FormationSlot {
    FormationSlot {
        kind: EnemyKind::Bee,
        home: Position::new(x, ROW_Y[4]),
    }
}

fn spawn_point() -> Position {
    Position::new(SPAWN_X, SPAWN_Y)
}

fn drain_events(snapshots: &[GameSnapshot]) -> Vec<SimEvent> {
    snapshots.iter().flat_map(|s| s.events.clone()).collect()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 12345 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 12345 });

    engine_a.queue_command(PlayerCommand::StartMission);
    engine_b.queue_command(PlayerCommand::StartMission);

    for tick in 0..600 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed at tick {}", tick);
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 111 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 222 });

    engine_a.queue_command(PlayerCommand::StartMission);
    engine_b.queue_command(PlayerCommand::StartMission);

    // Dive-target selection is the only seeded decision, so force plenty
    // of dives once the first wave is in formation.
    let mut diverged = false;
    for tick in 0..1200u64 {
        if tick >= 300 && tick % 30 == 0 {
            engine_a.queue_command(PlayerCommand::TriggerDive);
            engine_b.queue_command(PlayerCommand::TriggerDive);
        }
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Mission setup and wave spawning ----

#[test]
fn test_mission_spawns_full_formation() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartMission);

    let first = engine.tick();
    assert_eq!(first.phase, GamePhase::Active);
    assert_eq!(first.enemies.len(), 1, "first wave starts spawning at tick 0");

    let total: usize = ROW_SLOTS.iter().sum();
    let mut last = first;
    for _ in 0..600 {
        last = engine.tick();
    }
    assert_eq!(last.enemies.len(), total, "all waves should have spawned");

    let mut ids: Vec<u32> = last.enemies.iter().map(|e| e.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), total, "enemy ids must be unique and ordered");
}

#[test]
fn test_wave_spawned_events_emitted() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartMission);

    let mut snapshots = Vec::new();
    for _ in 0..600 {
        snapshots.push(engine.tick());
    }
    let waves = drain_events(&snapshots)
        .iter()
        .filter(|e| matches!(e, SimEvent::WaveSpawned { .. }))
        .count();
    let total: usize = ROW_SLOTS.iter().sum();
    assert_eq!(waves, total.div_ceil(8), "one event per wave");
}

#[test]
fn test_pause_freezes_time() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartMission);
    for _ in 0..10 {
        engine.tick();
    }

    engine.queue_command(PlayerCommand::Pause);
    let frozen = engine.tick();
    let tick_at_pause = frozen.time.tick;
    for _ in 0..20 {
        let snap = engine.tick();
        assert_eq!(snap.time.tick, tick_at_pause);
        assert_eq!(snap.phase, GamePhase::Paused);
    }

    engine.queue_command(PlayerCommand::Resume);
    let resumed = engine.tick();
    assert_eq!(resumed.time.tick, tick_at_pause + 1);
}

// ---- Formation lifecycle ----

#[test]
fn test_entry_completion_joins_formation_and_syncs_once() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.start_empty_mission();
    let id = engine.spawn_entering_enemy(bee_slot(0.1), FlightPattern::TopLoop, spawn_point());

    // TopLoop takes 2 simulated seconds.
    let mut snapshots = Vec::new();
    for _ in 0..(2 * TICK_RATE + 10) {
        snapshots.push(engine.tick());
    }

    let last = snapshots.last().unwrap();
    let enemy = &last.enemies[0];
    assert_eq!(enemy.id, id);
    assert_eq!(enemy.state, MovementState::FormationOut);
    assert!(enemy.in_formation);

    let syncs: Vec<_> = drain_events(&snapshots)
        .into_iter()
        .filter(|e| matches!(e, SimEvent::FormationSynced { .. }))
        .collect();
    assert_eq!(
        syncs,
        vec![SimEvent::FormationSynced {
            leader_id: id,
            followers: 0
        }],
        "entry completion broadcasts exactly one sync"
    );
}

#[test]
fn test_formation_moves_in_lockstep_after_sync() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.start_empty_mission();

    // Three enemies entering at staggered times: the first to finish
    // becomes the phase leader and yanks the others into its cycle.
    engine.spawn_entering_enemy(bee_slot(-0.1), FlightPattern::TopLoop, spawn_point());
    for _ in 0..30 {
        engine.tick();
    }
    engine.spawn_entering_enemy(bee_slot(0.0), FlightPattern::TopLoop, spawn_point());
    for _ in 0..30 {
        engine.tick();
    }
    engine.spawn_entering_enemy(bee_slot(0.1), FlightPattern::TopLoop, spawn_point());

    let mut snapshots = Vec::new();
    for _ in 0..(8 * TICK_RATE) {
        snapshots.push(engine.tick());
    }

    let syncs = drain_events(&snapshots)
        .iter()
        .filter(|e| matches!(e, SimEvent::FormationSynced { .. }))
        .count();
    assert_eq!(syncs, 1, "followers were re-phased, so only the leader syncs");

    // From the first synced snapshot on, every enemy shares one state and
    // state flips happen for all of them on the same tick.
    let first_synced = snapshots
        .iter()
        .position(|s| s.enemies.iter().all(|e| e.in_formation))
        .expect("formation never assembled");
    let mut flips = 0;
    let mut prev_state = None;
    for snap in &snapshots[first_synced..] {
        let state = snap.enemies[0].state;
        for enemy in &snap.enemies {
            assert_eq!(enemy.state, state, "formation out of lockstep");
        }
        if prev_state.is_some() && prev_state != Some(state) {
            flips += 1;
        }
        prev_state = Some(state);
    }
    assert!(flips >= 2, "formation cycle must keep flipping (saw {})", flips);
}

// ---- Dives ----

#[test]
fn test_trigger_dive_and_rejoin() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.start_empty_mission();
    let id = engine.spawn_entering_enemy(bee_slot(0.1), FlightPattern::TopLoop, spawn_point());

    for _ in 0..(2 * TICK_RATE + 10) {
        engine.tick();
    }

    engine.queue_command(PlayerCommand::TriggerDive);
    let snap = engine.tick();
    assert_eq!(snap.enemies[0].state, MovementState::Dive);
    assert!(snap
        .events
        .iter()
        .any(|e| *e == SimEvent::DiveStarted { enemy_id: id }));

    // The attack path takes 4 simulated seconds and returns to its start,
    // then the enemy rejoins the formation cycle.
    let mut rejoined = false;
    for _ in 0..(5 * TICK_RATE) {
        let snap = engine.tick();
        if snap.enemies[0].in_formation {
            rejoined = true;
            break;
        }
    }
    assert!(rejoined, "diver never rejoined the formation");
}

#[test]
fn test_diving_enemy_excluded_from_sync() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.start_empty_mission();
    let diver = engine.spawn_entering_enemy(bee_slot(-0.1), FlightPattern::TopLoop, spawn_point());

    // Let the first enemy assume position, then send it diving while a
    // second enemy is still on its entry path.
    for _ in 0..(2 * TICK_RATE + 10) {
        engine.tick();
    }
    let entrant = engine.spawn_entering_enemy(bee_slot(0.1), FlightPattern::TopLoop, spawn_point());
    engine.queue_command(PlayerCommand::TriggerDive);
    engine.tick();

    let mut snapshots = Vec::new();
    for _ in 0..(2 * TICK_RATE + 10) {
        snapshots.push(engine.tick());
    }

    // The entrant's completion broadcast must not have re-phased the diver.
    let events = drain_events(&snapshots);
    let sync = events
        .iter()
        .find(|e| matches!(e, SimEvent::FormationSynced { leader_id, .. } if *leader_id == entrant))
        .expect("entrant never completed entry");
    assert_eq!(
        *sync,
        SimEvent::FormationSynced {
            leader_id: entrant,
            followers: 0
        }
    );

    let during = snapshots
        .iter()
        .find(|s| s.events.contains(sync))
        .unwrap();
    let diver_view = during.enemies.iter().find(|e| e.id == diver).unwrap();
    assert_eq!(diver_view.state, MovementState::Dive);
}

#[test]
fn test_dive_ineligible_when_nobody_in_formation() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.start_empty_mission();
    engine.spawn_entering_enemy(bee_slot(0.1), FlightPattern::TopLoop, spawn_point());

    // Still entering: the trigger is dropped, nobody dives.
    engine.queue_command(PlayerCommand::TriggerDive);
    let snap = engine.tick();
    assert_eq!(snap.enemies[0].state, MovementState::AssumePosition);
    assert!(snap.events.is_empty());
}

// ---- Fighter ----

#[test]
fn test_fighter_strafe_clamps_at_world_edges() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.start_empty_mission();

    let limit = WORLD_WIDTH / 2.0 - FIGHTER_EDGE_MARGIN;

    engine.queue_command(PlayerCommand::SetStrafe {
        dir: StrafeDir::Left,
    });
    let mut snap = engine.tick();
    for _ in 0..(3 * TICK_RATE) {
        snap = engine.tick();
    }
    assert!((snap.fighter.position.x - (-limit)).abs() < 1e-9);
    assert_eq!(snap.fighter.position.y, FIGHTER_Y);

    engine.queue_command(PlayerCommand::SetStrafe {
        dir: StrafeDir::Right,
    });
    for _ in 0..(3 * TICK_RATE) {
        snap = engine.tick();
    }
    assert!((snap.fighter.position.x - limit).abs() < 1e-9);
}

#[test]
fn test_dive_targets_fighter_position_at_launch() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.start_empty_mission();
    engine.spawn_entering_enemy(bee_slot(0.1), FlightPattern::TopLoop, spawn_point());
    for _ in 0..(2 * TICK_RATE + 10) {
        engine.tick();
    }

    // Park the fighter off-center, then launch a dive.
    engine.queue_command(PlayerCommand::SetStrafe {
        dir: StrafeDir::Left,
    });
    for _ in 0..TICK_RATE {
        engine.tick();
    }
    engine.queue_command(PlayerCommand::SetStrafe {
        dir: StrafeDir::Center,
    });
    engine.tick();
    let fighter_x = engine.tick().fighter.position.x;

    engine.queue_command(PlayerCommand::TriggerDive);
    engine.tick();

    // Halfway through the dive (t = 2s) the path passes through the
    // target sampled at launch.
    let mut closest = f64::MAX;
    for _ in 0..(3 * TICK_RATE) {
        let snap = engine.tick();
        let enemy = &snap.enemies[0];
        let dx = enemy.position.x - fighter_x;
        let dy = enemy.position.y - FIGHTER_Y;
        closest = closest.min((dx * dx + dy * dy).sqrt());
    }
    assert!(
        closest < PIXEL_WIDTH * 2.0,
        "dive never passed near the sampled target (closest {})",
        closest
    );
}
