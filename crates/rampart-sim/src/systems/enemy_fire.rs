//! Enemy projectile system: Shooter and Boss shots flying at the towers.

use hecs::{Entity, World};

use rampart_core::components::Projectile;
use rampart_core::enums::Faction;
use rampart_core::types::Body;

use crate::systems::query;

/// Move enemy shots; the first live tower touched takes the damage.
pub fn run(world: &mut World, dt: f32, field_width: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let mut towers = query::live_towers(world);
    let mut tower_hits: Vec<(Entity, i32)> = Vec::new();

    for (entity, (body, projectile)) in world.query_mut::<(&mut Body, &mut Projectile)>() {
        if projectile.faction != Faction::Enemy {
            continue;
        }
        if projectile.spent {
            despawn_buffer.push(entity);
            continue;
        }

        body.center.x += projectile.direction * projectile.speed * dt;

        let shot = *body;
        if let Some(tower) = towers
            .iter_mut()
            .find(|tower| tower.is_alive() && tower.body.overlaps(&shot))
        {
            tower.health -= projectile.damage;
            tower_hits.push((tower.entity, projectile.damage));
            projectile.spent = true;
            despawn_buffer.push(entity);
            continue;
        }

        if query::outside_field(&shot, field_width) {
            despawn_buffer.push(entity);
        }
    }

    query::apply_tower_damage(world, &tower_hits);
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
