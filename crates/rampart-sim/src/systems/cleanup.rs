//! Cleanup system: removes destroyed enemies and towers.
//!
//! Enemies pay their category reward on removal. Towers free their build
//! zone; losing the main tower is reported to the caller.

use hecs::{Entity, World};
use tracing::{debug, info};

use rampart_core::components::{Enemy, Tower};
use rampart_core::enums::EnemyCategory;
use rampart_core::events::GameEvent;
use rampart_core::types::Health;

use rampart_enemy_ai::profiles::get_profile;

use crate::economy::{ScoreState, Treasury};
use crate::world_setup::BuildZone;

/// Sweep enemies at zero health: reward, events, boss bookkeeping.
pub fn sweep_enemies(
    world: &mut World,
    treasury: &mut Treasury,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    current_boss: &mut Option<Entity>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut destroyed: Vec<(u64, Entity, EnemyCategory)> = world
        .query::<(&Enemy, &Health)>()
        .iter()
        .filter(|(_, (_, health))| !health.is_alive())
        .map(|(entity, (enemy, _))| (enemy.spawn_order, entity, enemy.category()))
        .collect();
    destroyed.sort_unstable_by_key(|(order, _, _)| *order);

    for (_, entity, category) in destroyed {
        let reward = get_profile(category).reward;
        treasury.earn(reward);
        score.record_kill(category, reward);
        debug!(?category, reward, "enemy killed");
        events.push(GameEvent::EnemyKilled { category, reward });

        if category == EnemyCategory::Boss {
            info!("boss defeated");
            events.push(GameEvent::BossDefeated);
            if *current_boss == Some(entity) {
                *current_boss = None;
            }
        }
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Sweep towers at zero health. Returns `true` if the main tower fell.
pub fn sweep_towers(
    world: &mut World,
    zones: &mut [BuildZone],
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> bool {
    despawn_buffer.clear();
    let mut main_lost = false;

    let mut destroyed: Vec<(u64, Entity, Tower)> = world
        .query::<(&Tower, &Health)>()
        .iter()
        .filter(|(_, (_, health))| !health.is_alive())
        .map(|(entity, (tower, _))| (tower.build_order, entity, tower.clone()))
        .collect();
    destroyed.sort_unstable_by_key(|(order, _, _)| *order);

    for (_, entity, tower) in destroyed {
        if let Some(zone) = tower.zone.and_then(|index| zones.get_mut(index)) {
            zone.occupant = None;
        }
        score.towers_lost += 1;
        main_lost |= tower.is_main;
        debug!(kind = ?tower.kind, was_main = tower.is_main, "tower destroyed");
        events.push(GameEvent::TowerDestroyed {
            kind: tower.kind,
            was_main: tower.is_main,
        });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    main_lost
}
