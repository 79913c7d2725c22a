//! Headless simulation engine for STARSWARM.
//!
//! Owns the hecs ECS world and drives the per-tick pipeline: wave spawning,
//! fighter strafing, dive scheduling, and enemy flight (state machine +
//! path evaluation). Completely headless, enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
