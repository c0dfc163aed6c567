//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy category, fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyCategory {
    Basic,
    Shooter,
    Bomber,
    Shield,
    Boss,
}

impl EnemyCategory {
    pub const ALL: [EnemyCategory; 5] = [
        EnemyCategory::Basic,
        EnemyCategory::Shooter,
        EnemyCategory::Bomber,
        EnemyCategory::Shield,
        EnemyCategory::Boss,
    ];

    /// Position of this category in stage weight tables.
    pub fn index(self) -> usize {
        match self {
            EnemyCategory::Basic => 0,
            EnemyCategory::Shooter => 1,
            EnemyCategory::Bomber => 2,
            EnemyCategory::Shield => 3,
            EnemyCategory::Boss => 4,
        }
    }
}

/// Shooter behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShooterPhase {
    /// Walking toward the firing line.
    #[default]
    Moving,
    /// Planted past the firing line, firing until killed.
    Attacking,
}

/// Boss behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    #[default]
    Moving,
    /// Halted at its target line, shelling towers.
    Stationary,
}

/// Defender tower type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    Basic,
    Aoe,
    Fast,
    Slow,
}

impl TowerKind {
    pub const ALL: [TowerKind; 4] = [
        TowerKind::Basic,
        TowerKind::Aoe,
        TowerKind::Fast,
        TowerKind::Slow,
    ];

    pub fn index(self) -> usize {
        match self {
            TowerKind::Basic => 0,
            TowerKind::Aoe => 1,
            TowerKind::Fast => 2,
            TowerKind::Slow => 3,
        }
    }
}

/// Trap effect type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrapKind {
    /// Small damage plus a short slow on the triggering enemy.
    Attack,
    /// Long, heavy slow on the triggering enemy.
    Slow,
    /// Damage to every enemy in a radius around the trap.
    Explosion,
}

impl TrapKind {
    pub const ALL: [TrapKind; 3] = [TrapKind::Attack, TrapKind::Slow, TrapKind::Explosion];

    pub fn index(self) -> usize {
        match self {
            TrapKind::Attack => 0,
            TrapKind::Slow => 1,
            TrapKind::Explosion => 2,
        }
    }
}

/// Tower stat that can be upgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeStat {
    Attack,
    Defense,
    Speed,
}

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Tower,
    Enemy,
}

/// Visual tint hint derived from an enemy's active effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTint {
    #[default]
    None,
    Slowed,
    HeavySlowed,
    KnockedBack,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Field laid out, waiting for `StartGame`.
    #[default]
    Briefing,
    Active,
    Paused,
    Victory,
    Defeat,
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}
