//! Campaign definitions: per-stage spawn weights and wave counts.
//!
//! Weights are ordered Basic, Shooter, Bomber, Shield, Boss. The boss
//! column is always zero: the final wave of the final stage forces
//! exactly one boss instead.

use crate::config::StageTable;

/// Stock three-stage campaign with escalating mixes.
pub fn default_campaign() -> Vec<StageTable> {
    vec![
        // Stage 1: mostly walkers, a few shooters and shields
        StageTable {
            weights: [70, 15, 0, 15, 0],
            waves: 3,
        },
        // Stage 2: bombers join
        StageTable {
            weights: [45, 20, 15, 20, 0],
            waves: 3,
        },
        // Stage 3: heavy mix, boss on the last wave
        StageTable {
            weights: [35, 20, 20, 25, 0],
            waves: 3,
        },
    ]
}

/// Spawn index on the final wave at which the boss is forced.
pub fn boss_spawn_index(quota: u32) -> u32 {
    quota / 2
}
