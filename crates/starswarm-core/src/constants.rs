//! Simulation constants and tuning parameters.
//!
//! World coordinates are normalized: the play field is WORLD_WIDTH wide,
//! centered on x = 0, with y growing upward from the bottom edge.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World geometry ---

/// Width of the world in world units.
pub const WORLD_WIDTH: f64 = 1.0;

/// Height of the world, preserving the 700x680 display aspect.
pub const WORLD_HEIGHT: f64 = WORLD_WIDTH * 680.0 / 700.0;

/// Width of one game pixel in world units (256 pixels per screen height).
pub const PIXEL_WIDTH: f64 = WORLD_HEIGHT / 256.0;

// --- Formation layout ---

/// Y coordinate of the fighter.
pub const FIGHTER_Y: f64 = PIXEL_WIDTH * 20.0;

/// Y coordinate of the row of boss enemies in formation.
pub const BOSS_Y: f64 = WORLD_HEIGHT - PIXEL_WIDTH * 30.0;

/// Buffer between enemies in formation.
pub const ENEMY_BUFFER: f64 = PIXEL_WIDTH * 15.0;

/// Y coordinates of each row of enemies, boss row first.
pub const ROW_Y: [f64; 5] = [
    BOSS_Y,
    BOSS_Y - ENEMY_BUFFER,
    BOSS_Y - 2.0 * ENEMY_BUFFER,
    BOSS_Y - 3.0 * ENEMY_BUFFER,
    BOSS_Y - 4.0 * ENEMY_BUFFER,
];

/// Number of formation slots per row, boss row first.
pub const ROW_SLOTS: [usize; 5] = [4, 8, 8, 10, 10];

// --- Movement ---

/// Time it takes the fighter to strafe from one side of the world to the other.
pub const CROSS_WORLD_TIME: f64 = 2.0;

/// Speed at which the fighter strafes.
pub const STRAFE_SPEED: f64 = WORLD_WIDTH / CROSS_WORLD_TIME;

/// Time it takes a missile to travel the full height of the world.
pub const DOWN_WORLD_TIME: f64 = 1.0;

/// Speed of missiles.
pub const BULLET_SPEED: f64 = WORLD_HEIGHT / DOWN_WORLD_TIME;

/// Margin keeping the fighter inside the world edges.
pub const FIGHTER_EDGE_MARGIN: f64 = PIXEL_WIDTH * 10.0;

// --- Formation cycle ---

/// Time spent in one FORMATION_OUT or FORMATION_IN leg (seconds).
pub const FORMATION_CYCLE_TIME: f64 = 2.0;

/// Home-position scale factor for the expanded (FORMATION_OUT) goal.
pub const FORMATION_EXPAND_FACTOR: f64 = 1.25;

/// Home-position scale factor for the contracted (FORMATION_IN) goal.
pub const FORMATION_CONTRACT_FACTOR: f64 = 0.8;

/// Heading enemies hold while cycling in formation (radians).
pub const NEUTRAL_HEADING: f64 = 0.0;

// --- Spawning ---

/// Time between enemy spawns within one wave (seconds).
pub const SPAWN_TIME: f64 = 0.1;

/// Time between waves of entering enemies (seconds).
pub const WAVE_TIME: f64 = 2.0;

/// Y coordinate at which entering enemies spawn.
pub const SPAWN_Y: f64 = WORLD_HEIGHT - PIXEL_WIDTH * 5.0;

/// X offset from center at which entering enemies spawn.
pub const SPAWN_X: f64 = WORLD_WIDTH / 2.0 * 0.9;

// --- Dive scheduling ---

/// Interval between automatic dive launches (seconds).
pub const DIVE_INTERVAL_SECS: f64 = 4.0;
