//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems and in the
//! enemy behavior crate, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Category-specific enemy state. The category is implied by the variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyBehavior {
    Basic,
    Shooter { phase: ShooterPhase, fire_timer: f32 },
    Bomber,
    Shield,
    Boss { phase: BossPhase, fire_timer: f32 },
}

impl EnemyBehavior {
    /// Initial behavior for a freshly spawned enemy.
    pub fn for_category(category: EnemyCategory) -> Self {
        match category {
            EnemyCategory::Basic => EnemyBehavior::Basic,
            EnemyCategory::Shooter => EnemyBehavior::Shooter {
                phase: ShooterPhase::Moving,
                fire_timer: 0.0,
            },
            EnemyCategory::Bomber => EnemyBehavior::Bomber,
            EnemyCategory::Shield => EnemyBehavior::Shield,
            EnemyCategory::Boss => EnemyBehavior::Boss {
                phase: BossPhase::Moving,
                fire_timer: 0.0,
            },
        }
    }

    pub fn category(&self) -> EnemyCategory {
        match self {
            EnemyBehavior::Basic => EnemyCategory::Basic,
            EnemyBehavior::Shooter { .. } => EnemyCategory::Shooter,
            EnemyBehavior::Bomber => EnemyCategory::Bomber,
            EnemyBehavior::Shield => EnemyCategory::Shield,
            EnemyBehavior::Boss { .. } => EnemyCategory::Boss,
        }
    }

    /// Human-readable state name, used by presentation triggers.
    pub fn state_name(&self) -> &'static str {
        match self {
            EnemyBehavior::Shooter {
                phase: ShooterPhase::Attacking,
                ..
            } => "attacking",
            EnemyBehavior::Boss {
                phase: BossPhase::Stationary,
                ..
            } => "stationary",
            _ => "moving",
        }
    }

    /// True once a Boss has halted at its target line.
    pub fn has_reached_target(&self) -> bool {
        matches!(
            self,
            EnemyBehavior::Boss {
                phase: BossPhase::Stationary,
                ..
            }
        )
    }

    /// Stationary states never move, knockback included.
    pub fn is_planted(&self) -> bool {
        matches!(
            self,
            EnemyBehavior::Shooter {
                phase: ShooterPhase::Attacking,
                ..
            } | EnemyBehavior::Boss {
                phase: BossPhase::Stationary,
                ..
            }
        )
    }
}

/// Enemy marker and movement data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub behavior: EnemyBehavior,
    /// Unmodified movement speed (px/s).
    pub base_speed: f32,
    /// Speed after status effects, recomputed every frame.
    pub speed: f32,
    /// Position in the live enemy list; lower spawned earlier.
    pub spawn_order: u64,
}

impl Enemy {
    pub fn category(&self) -> EnemyCategory {
        self.behavior.category()
    }
}

/// Per-tower upgrade levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerUpgrades {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl TowerUpgrades {
    pub fn level_for(&self, stat: UpgradeStat) -> u32 {
        match stat {
            UpgradeStat::Attack => self.attack,
            UpgradeStat::Defense => self.defense,
            UpgradeStat::Speed => self.speed,
        }
    }

    pub fn set_level(&mut self, stat: UpgradeStat, level: u32) {
        match stat {
            UpgradeStat::Attack => self.attack = level,
            UpgradeStat::Defense => self.defense = level,
            UpgradeStat::Speed => self.speed = level,
        }
    }

    /// Upgrade slots consumed across all stats.
    pub fn slots_used(&self) -> u32 {
        self.attack + self.defense + self.speed
    }
}

/// Defender tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    pub damage: i32,
    /// Seconds between shots.
    pub fire_rate: f32,
    /// Seconds until the next shot is allowed.
    pub fire_cooldown: f32,
    pub upgrades: TowerUpgrades,
    /// The main structure. Losing it ends the game.
    pub is_main: bool,
    /// Build-zone index this tower occupies, if deployed by the player.
    pub zone: Option<usize>,
    /// Gold spent on this tower (deploy plus upgrades), basis for refunds.
    pub invested: u32,
    /// Construction order; contact resolution picks the lowest overlapping.
    pub build_order: u64,
}

/// Projectile payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Damages the first enemy it touches.
    Plain,
    /// Detonates on first contact, damaging everything within `radius`.
    Aoe { radius: f32 },
    /// Slows the first enemy it touches.
    Slow { duration: f32, strength: f32 },
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub faction: Faction,
    pub kind: ProjectileKind,
    /// Horizontal travel sign, fixed at launch: -1.0 or 1.0.
    pub direction: f32,
    pub speed: f32,
    pub damage: i32,
    /// Set once the projectile has applied its effect.
    pub spent: bool,
}

/// Ordnance dropped by a Bomber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    /// Ground point the bomb falls onto and explodes at.
    pub landing: Vec2,
    /// Height above the landing point.
    pub altitude: f32,
    /// Downward speed (px/s).
    pub fall_speed: f32,
    pub landed: bool,
    pub exploded: bool,
}

/// A trap zone. Stored by the engine, not as an ECS entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trap {
    pub zone: crate::types::Rect,
    pub kind: Option<TrapKind>,
    /// Armed by the player.
    pub occupied: bool,
    /// Single-use trap already fired this arming.
    pub used: bool,
    /// Seconds until a reusable trap can fire again.
    pub cooldown: f32,
    /// Gold paid to arm this trap.
    pub invested: u32,
}

impl Trap {
    pub fn empty(zone: crate::types::Rect) -> Self {
        Self {
            zone,
            kind: None,
            occupied: false,
            used: false,
            cooldown: 0.0,
            invested: 0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.zone.center()
    }

    /// Armed, off cooldown and not spent.
    pub fn is_ready(&self) -> bool {
        self.occupied && !self.used && self.cooldown <= 0.0 && self.kind.is_some()
    }
}
