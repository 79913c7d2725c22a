//! Wave spawning system — releases entering enemies at scheduled times.
//!
//! Waves are WAVE_TIME apart; enemies within a wave are staggered by
//! SPAWN_TIME. Waves alternate spawn side and cycle through the entry
//! patterns.

use hecs::World;

use starswarm_core::constants::*;
use starswarm_core::enums::FlightPattern;
use starswarm_core::events::SimEvent;
use starswarm_core::types::Position;

use crate::world_setup::{self, FormationSlot};

/// Enemies released per wave.
const WAVE_SIZE: usize = 8;

/// One scheduled wave of entering enemies.
#[derive(Debug, Clone)]
pub struct WaveEntry {
    /// Tick at which this wave starts spawning.
    pub start_tick: u64,
    /// Formation slots filled by this wave, in spawn order.
    pub slots: Vec<FormationSlot>,
    pub pattern: FlightPattern,
    /// Signed x of the spawn point (alternates per wave).
    pub spawn_x: f64,
    /// Next slot index to spawn.
    pub next_slot: usize,
}

/// The complete wave schedule for a mission.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Default mission: the whole formation grid, released in waves of
    /// eight from alternating sides.
    pub fn default_mission() -> Self {
        let patterns = [
            FlightPattern::DoubleCross,
            FlightPattern::BottomLoop,
            FlightPattern::TopLoop,
        ];
        let wave_ticks = (WAVE_TIME * TICK_RATE as f64) as u64;

        let waves = world_setup::formation_slots()
            .chunks(WAVE_SIZE)
            .enumerate()
            .map(|(i, chunk)| WaveEntry {
                start_tick: i as u64 * wave_ticks,
                slots: chunk.to_vec(),
                pattern: patterns[i % patterns.len()],
                spawn_x: if i % 2 == 0 { SPAWN_X } else { -SPAWN_X },
                next_slot: 0,
            })
            .collect();

        Self { waves }
    }

    /// Total number of enemies across all waves.
    pub fn total_enemies(&self) -> usize {
        self.waves.iter().map(|w| w.slots.len()).sum()
    }
}

/// Check the schedule and spawn any due enemies.
pub fn run(
    world: &mut World,
    schedule: &mut WaveSchedule,
    next_enemy_id: &mut u32,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
) {
    let stagger_ticks = (SPAWN_TIME * TICK_RATE as f64) as u64;

    for wave in &mut schedule.waves {
        while wave.next_slot < wave.slots.len()
            && current_tick >= wave.start_tick + wave.next_slot as u64 * stagger_ticks
        {
            if wave.next_slot == 0 {
                events.push(SimEvent::WaveSpawned {
                    count: wave.slots.len() as u32,
                });
            }
            let slot = wave.slots[wave.next_slot];
            let start = Position::new(wave.spawn_x, SPAWN_Y);
            let _ = world_setup::spawn_enemy(world, *next_enemy_id, slot, wave.pattern, start);
            *next_enemy_id += 1;
            wave.next_slot += 1;
        }
    }
}
