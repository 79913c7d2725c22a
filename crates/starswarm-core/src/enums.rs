//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Movement state of an enemy. Exactly one is active at a time; transitions
/// fire only when the current path's goal is reached, or on an external
/// dive trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementState {
    /// Flying an entry path toward the assigned formation slot.
    #[default]
    AssumePosition,
    /// Attack run toward the fighter's sampled position.
    Dive,
    /// In formation, moving outward from the formation center.
    FormationOut,
    /// In formation, moving back inward.
    FormationIn,
}

impl MovementState {
    /// True for the two legs of the idle formation cycle.
    pub fn in_formation(&self) -> bool {
        matches!(self, MovementState::FormationOut | MovementState::FormationIn)
    }
}

/// Named entry flight patterns. Each maps to a pure waypoint generator;
/// the interior geometry is cosmetic, but every pattern starts at the
/// spawn point at t = 0 and ends at the formation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPattern {
    /// Crosses the field twice before assuming position.
    DoubleCross,
    /// Loops up from the bottom of the field.
    BottomLoop,
    /// Loops down from the top of the field.
    TopLoop,
}

/// Enemy archetype, determining formation row placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Boss,
    Butterfly,
    Bee,
}

impl EnemyKind {
    /// Archetype occupying a given formation row (boss row is row 0).
    pub fn for_row(row: usize) -> EnemyKind {
        match row {
            0 => EnemyKind::Boss,
            1 | 2 => EnemyKind::Butterfly,
            _ => EnemyKind::Bee,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No mission running.
    #[default]
    MainMenu,
    /// Simulation advancing.
    Active,
    /// Simulation frozen.
    Paused,
}

/// Latched strafe intent for the fighter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrafeDir {
    Left,
    #[default]
    Center,
    Right,
}
