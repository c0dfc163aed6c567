//! Game state snapshot: the complete visible state handed to presentation each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{ProjectileKind, TowerUpgrades};
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Rect, SimTime};

/// Complete game state broadcast after each `update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub gold: u32,
    pub stage: u32,
    pub wave: u32,
    pub waves_in_stage: u32,
    pub stage_count: u32,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub bombs: Vec<BombView>,
    pub traps: Vec<TrapView>,
    pub build_zones: Vec<BuildZoneView>,
    pub cooldowns: CooldownView,
    pub boss: Option<BossView>,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

impl GameStateSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn is_game_won(&self) -> bool {
        self.phase == GamePhase::Victory
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub category: EnemyCategory,
    pub position: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub state: String,
    pub tint: EffectTint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub kind: TowerKind,
    pub position: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub fire_rate: f32,
    pub upgrades: TowerUpgrades,
    pub is_main: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub faction: Faction,
    pub kind: ProjectileKind,
    pub position: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombView {
    /// Drawn position: landing point raised by the current altitude.
    pub position: Vec2,
    pub landed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapView {
    pub zone: Rect,
    pub kind: Option<TrapKind>,
    pub armed: bool,
    pub cooldown: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildZoneView {
    pub zone: Rect,
    pub occupied: bool,
}

/// Remaining deploy cooldown per type, for UI overlays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CooldownView {
    /// Indexed by `TowerKind::index`.
    pub towers: [f32; 4],
    /// Indexed by `TrapKind::index`.
    pub traps: [f32; 3],
}

/// Read-only boss observations for music and banner triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub health: i32,
    pub max_health: i32,
    pub state: String,
    pub reached_target: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    /// Kills indexed by `EnemyCategory::index`.
    pub kills: [u32; 5],
    pub escaped: u32,
    pub towers_lost: u32,
    pub gold_earned: u32,
}
