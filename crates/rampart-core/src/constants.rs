//! Simulation constants and tuning parameters.
//!
//! Units: pixels, seconds, gold. The play field's origin is the top-left
//! corner; enemies walk from the right edge toward x = 0.

use crate::components::ProjectileKind;
use crate::enums::{TowerKind, TrapKind, UpgradeStat};

// --- Play field ---

pub const FIELD_WIDTH: f32 = 1280.0;
pub const FIELD_HEIGHT: f32 = 720.0;

/// Enemies spawn centered on this x.
pub const ENEMY_SPAWN_X: f32 = FIELD_WIDTH;

/// Largest frame delta the engine will simulate in one step.
pub const MAX_FRAME_DELTA: f32 = 0.1;

// --- Status effects ---

pub const KNOCKBACK_DURATION: f32 = 0.5;
/// Backward speed while knocked back (px/s).
pub const KNOCKBACK_SPEED: f32 = 120.0;
/// Attack lockout started by a knockback.
pub const ATTACK_COOLDOWN: f32 = 1.0;
/// Speed multiplier of the heavy slow.
pub const HEAVY_SLOW_STRENGTH: f32 = 0.1;

// --- Enemy behavior ---

/// Melee damage dealt on tower contact.
pub const CONTACT_DAMAGE: i32 = 1;

pub const SHOOTER_FIRING_LINE_X: f32 = 900.0;
pub const SHOOTER_FIRE_INTERVAL: f32 = 2.0;
pub const SHOOTER_SHOT_DAMAGE: i32 = 1;
pub const SHOOTER_SHOT_SPEED: f32 = 260.0;

pub const BOSS_TARGET_X: f32 = 950.0;
pub const BOSS_FIRE_INTERVAL: f32 = 3.5;
pub const BOSS_SHOT_DAMAGE: i32 = 3;
pub const BOSS_SHOT_SPEED: f32 = 200.0;

/// Horizontal search band for a Basic looking for a Shield to hide behind.
pub const PROTECTION_BAND: f32 = 200.0;
/// Spacing kept between a sheltering Basic and its Shield.
pub const PROTECTION_GAP: f32 = 4.0;

// --- Projectiles ---

pub const PROJECTILE_SIZE: (f32, f32) = (16.0, 8.0);
pub const ENEMY_SHOT_SIZE: (f32, f32) = (20.0, 10.0);
pub const AOE_SPLASH_RADIUS: f32 = 90.0;
pub const SLOW_SHOT_DURATION: f32 = 2.0;
pub const SLOW_SHOT_STRENGTH: f32 = 0.5;

// --- Bombs ---

/// Height above the landing point a bomb is released from.
pub const BOMB_DROP_HEIGHT: f32 = 120.0;
/// Downward acceleration (px/s²).
pub const BOMB_GRAVITY: f32 = 600.0;
pub const BOMB_BLAST_RADIUS: f32 = 100.0;
pub const BOMB_DAMAGE: i32 = 2;
pub const BOMB_SIZE: (f32, f32) = (24.0, 24.0);

// --- Traps ---

pub const EXPLOSION_TRAP_RADIUS: f32 = 250.0;
pub const EXPLOSION_TRAP_DAMAGE: i32 = 3;
pub const ATTACK_TRAP_DAMAGE: i32 = 1;
pub const ATTACK_TRAP_SLOW_DURATION: f32 = 1.0;
pub const ATTACK_TRAP_SLOW_STRENGTH: f32 = 0.5;
pub const SLOW_TRAP_DURATION: f32 = 4.0;

// --- Towers ---

pub const MAIN_TOWER_HEALTH: i32 = 10;
pub const TOWER_SIZE: (f32, f32) = (64.0, 96.0);
pub const MAIN_TOWER_SIZE: (f32, f32) = (96.0, 192.0);

/// Shared upgrade slots per tower.
pub const MAX_UPGRADE_SLOTS: u32 = 5;
/// Upgrade cap per stat.
pub const MAX_STAT_LEVEL: u32 = 3;
pub const UPGRADE_COST_MULTIPLIER: f32 = 1.5;
pub const SPEED_UPGRADE_STEP: f32 = 0.1;
pub const MIN_FIRE_RATE: f32 = 0.2;

/// Share of the invested gold returned when removing a defense.
pub const REFUND_RATIO: f32 = 0.5;

// --- Economy and waves ---

pub const STARTING_GOLD: u32 = 100;
pub const PASSIVE_INCOME: u32 = 5;
pub const PASSIVE_INCOME_INTERVAL: f32 = 2.0;
pub const WAVE_BONUS: u32 = 50;
pub const WAVE_SPAWN_INTERVAL: f32 = 1.5;
pub const WAVE_TRANSITION_DELAY: f32 = 3.0;
pub const BASE_WAVE_QUOTA: u32 = 5;
pub const WAVE_QUOTA_GROWTH: u32 = 3;

/// Fixed stats for a tower type.
#[derive(Debug, Clone, Copy)]
pub struct TowerProfile {
    pub health: i32,
    pub damage: i32,
    pub fire_rate: f32,
    pub projectile: ProjectileKind,
    pub projectile_speed: f32,
    pub cost: u32,
    /// Seconds before another tower of this type may be deployed.
    pub deploy_cooldown: f32,
}

pub fn tower_profile(kind: TowerKind) -> TowerProfile {
    match kind {
        TowerKind::Basic => TowerProfile {
            health: 3,
            damage: 1,
            fire_rate: 1.0,
            projectile: ProjectileKind::Plain,
            projectile_speed: 400.0,
            cost: 40,
            deploy_cooldown: 5.0,
        },
        TowerKind::Aoe => TowerProfile {
            health: 3,
            damage: 2,
            fire_rate: 2.5,
            projectile: ProjectileKind::Aoe {
                radius: AOE_SPLASH_RADIUS,
            },
            projectile_speed: 300.0,
            cost: 80,
            deploy_cooldown: 10.0,
        },
        TowerKind::Fast => TowerProfile {
            health: 2,
            damage: 1,
            fire_rate: 0.3,
            projectile: ProjectileKind::Plain,
            projectile_speed: 550.0,
            cost: 60,
            deploy_cooldown: 8.0,
        },
        TowerKind::Slow => TowerProfile {
            health: 3,
            damage: 0,
            fire_rate: 1.5,
            projectile: ProjectileKind::Slow {
                duration: SLOW_SHOT_DURATION,
                strength: SLOW_SHOT_STRENGTH,
            },
            projectile_speed: 350.0,
            cost: 50,
            deploy_cooldown: 6.0,
        },
    }
}

/// Fixed parameters for a trap type.
#[derive(Debug, Clone, Copy)]
pub struct TrapProfile {
    pub cost: u32,
    pub deploy_cooldown: f32,
    /// Disarms after one trigger.
    pub single_use: bool,
    /// Re-trigger delay for reusable traps.
    pub trigger_cooldown: f32,
}

pub fn trap_profile(kind: TrapKind) -> TrapProfile {
    match kind {
        TrapKind::Attack => TrapProfile {
            cost: 30,
            deploy_cooldown: 6.0,
            single_use: false,
            trigger_cooldown: 1.5,
        },
        TrapKind::Slow => TrapProfile {
            cost: 25,
            deploy_cooldown: 6.0,
            single_use: false,
            trigger_cooldown: 3.0,
        },
        TrapKind::Explosion => TrapProfile {
            cost: 50,
            deploy_cooldown: 10.0,
            single_use: true,
            trigger_cooldown: 0.0,
        },
    }
}

/// Base gold cost of the first upgrade of a stat.
pub fn upgrade_base_cost(stat: UpgradeStat) -> u32 {
    match stat {
        UpgradeStat::Attack => 30,
        UpgradeStat::Defense => 20,
        UpgradeStat::Speed => 25,
    }
}

/// Cost of the next upgrade of `stat` given its current level:
/// `base × UPGRADE_COST_MULTIPLIER ^ level`, rounded.
pub fn upgrade_cost(stat: UpgradeStat, current_level: u32) -> u32 {
    let base = upgrade_base_cost(stat) as f32;
    (base * UPGRADE_COST_MULTIPLIER.powi(current_level as i32)).round() as u32
}
