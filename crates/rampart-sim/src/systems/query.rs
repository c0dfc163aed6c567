//! Read-only lookups shared by several systems.
//!
//! hecs iteration order shifts as entities are despawned, so anything whose
//! outcome depends on order is sorted here: towers by build order, enemies
//! by spawn order.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, Tower};
use rampart_core::types::{Body, Health};

/// A live tower plus a local health mirror, so damage applied earlier in
/// the same pass is visible before it is written back.
#[derive(Debug, Clone, Copy)]
pub struct LiveTower {
    pub entity: Entity,
    pub body: Body,
    pub health: i32,
}

impl LiveTower {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Live towers ordered by build order.
pub fn live_towers(world: &World) -> Vec<LiveTower> {
    let mut towers: Vec<(u64, LiveTower)> = world
        .query::<(&Body, &Health, &Tower)>()
        .iter()
        .filter(|(_, (_, health, _))| health.is_alive())
        .map(|(entity, (body, health, tower))| {
            (
                tower.build_order,
                LiveTower {
                    entity,
                    body: *body,
                    health: health.current,
                },
            )
        })
        .collect();
    towers.sort_unstable_by_key(|(order, _)| *order);
    towers.into_iter().map(|(_, tower)| tower).collect()
}

/// Live enemies ordered by spawn order (the "live enemy list").
pub fn live_enemies(world: &World) -> Vec<(Entity, Body)> {
    let mut enemies: Vec<(u64, Entity, Body)> = world
        .query::<(&Body, &Health, &Enemy)>()
        .iter()
        .filter(|(_, (_, health, _))| health.is_alive())
        .map(|(entity, (body, _, enemy))| (enemy.spawn_order, entity, *body))
        .collect();
    enemies.sort_unstable_by_key(|(order, _, _)| *order);
    enemies
        .into_iter()
        .map(|(_, entity, body)| (entity, body))
        .collect()
}

pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|health| health.is_alive())
        .unwrap_or(false)
}

/// Write damage back to towers hit during a pass.
pub fn apply_tower_damage(world: &mut World, hits: &[(Entity, i32)]) {
    for &(entity, damage) in hits {
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            health.take_damage(damage);
        }
    }
}

/// Damage an enemy. Returns the health left, or `None` if it is gone.
pub fn damage_enemy(world: &World, entity: Entity, damage: i32) -> Option<i32> {
    world
        .get::<&mut Health>(entity)
        .ok()
        .map(|mut health| health.take_damage(damage))
}

/// Entities whose bodies have fully left the field horizontally.
pub fn outside_field(body: &Body, width: f32) -> bool {
    let rect = body.rect();
    rect.max.x < 0.0 || rect.min.x > width
}
