//! Events emitted by the simulation for audio and presentation feedback.
//!
//! Fire-and-forget: the simulation never reads them back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::error::ActionError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy entered the field.
    EnemySpawned { category: EnemyCategory },
    /// An enemy was killed and its reward paid out.
    EnemyKilled { category: EnemyCategory, reward: u32 },
    /// An enemy walked off the left edge without being killed.
    EnemyEscaped { category: EnemyCategory },
    TowerDeployed { kind: TowerKind },
    TowerUpgraded { kind: TowerKind, stat: UpgradeStat, level: u32 },
    TowerDestroyed { kind: TowerKind, was_main: bool },
    TrapArmed { kind: TrapKind },
    TrapTriggered { kind: TrapKind, at: Vec2 },
    /// A defense was removed by the player.
    DefenseRemoved { refund: u32 },
    TowerFired { kind: TowerKind },
    EnemyFired { category: EnemyCategory },
    BombDropped { at: Vec2 },
    BombExploded { at: Vec2, towers_hit: u32 },
    BossSpawned,
    /// The boss halted at its target line.
    BossArrived,
    BossDefeated,
    WaveComplete { stage: u32, wave: u32, bonus: u32 },
    StageComplete { stage: u32 },
    Victory,
    Defeat,
    /// A player command was refused.
    ActionRejected { reason: ActionError },
}
