//! Player commands sent from the presentation layer to the simulation.
//!
//! Queued commands are drained at the start of the next `update`, before
//! any system runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Match flow ---
    /// Leave the briefing and start wave 1.
    StartGame,
    Pause,
    Resume,

    // --- Defenses ---
    /// Build a tower in the free build zone containing `at`.
    DeployTower { kind: TowerKind, at: Vec2 },
    /// Arm the empty trap zone containing `at`.
    DeployTrap { kind: TrapKind, at: Vec2 },
    /// Upgrade one stat of the tower whose body contains `at`.
    UpgradeTower { at: Vec2, stat: UpgradeStat },
    /// Remove the tower or trap at `at` for a partial refund.
    RemoveAt { at: Vec2 },
}
