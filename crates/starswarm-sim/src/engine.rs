//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameSnapshot`s. One external driver
//! advances simulated time once per frame; nothing here suspends or blocks.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starswarm_core::commands::PlayerCommand;
use starswarm_core::components::StrafeIntent;
use starswarm_core::enums::GamePhase;
use starswarm_core::events::SimEvent;
use starswarm_core::state::GameSnapshot;
use starswarm_core::types::SimTime;

use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    wave_schedule: WaveSchedule,
    next_enemy_id: u32,
    pending_dives: u32,
    next_dive_tick: u64,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            wave_schedule: WaveSchedule::default(),
            next_enemy_id: 0,
            pending_dives: 0,
            next_dive_tick: 0,
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Start an active mission with no wave schedule (for tests that spawn
    /// their own enemies).
    #[cfg(test)]
    pub fn start_empty_mission(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        world_setup::spawn_fighter(&mut self.world);
        self.wave_schedule = WaveSchedule::default();
        self.next_dive_tick = u64::MAX;
        self.phase = GamePhase::Active;
    }

    /// Spawn a single enemy on an entry path (for tests).
    #[cfg(test)]
    pub fn spawn_entering_enemy(
        &mut self,
        slot: crate::world_setup::FormationSlot,
        pattern: starswarm_core::enums::FlightPattern,
        start: starswarm_core::types::Position,
    ) -> u32 {
        let id = self.next_enemy_id;
        let _ = world_setup::spawn_enemy(&mut self.world, id, slot, pattern, start);
        self.next_enemy_id += 1;
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMission => {
                if self.phase == GamePhase::MainMenu {
                    self.world = World::new();
                    self.time = SimTime::default();
                    world_setup::spawn_fighter(&mut self.world);
                    self.wave_schedule = WaveSchedule::default_mission();
                    self.next_enemy_id = 0;
                    self.pending_dives = 0;
                    self.next_dive_tick = systems::dive::interval_ticks();
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetStrafe { dir } => {
                for (_entity, intent) in self.world.query_mut::<&mut StrafeIntent>() {
                    intent.dir = dir;
                }
            }
            PlayerCommand::TriggerDive => {
                if self.phase == GamePhase::Active {
                    self.pending_dives += 1;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.wave_schedule,
            &mut self.next_enemy_id,
            self.time.tick,
            &mut self.events,
        );
        // 2. Fighter strafe
        systems::strafe::run(&mut self.world);
        // 3. Dive scheduling (reads the fighter position post-strafe)
        systems::dive::run(
            &mut self.world,
            &mut self.rng,
            &mut self.pending_dives,
            &mut self.next_dive_tick,
            self.time.tick,
            &mut self.events,
        );
        // 4. Enemy flight: transitions, path advance, sync broadcasts
        systems::flight::run(&mut self.world, &mut self.events);
    }
}
