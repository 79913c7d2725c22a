//! Simulation systems, run in a fixed order each tick.

pub mod dive;
pub mod flight;
pub mod snapshot;
pub mod strafe;
pub mod wave_spawner;
