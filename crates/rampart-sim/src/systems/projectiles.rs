//! Tower projectile system: flight and impact against enemies.
//!
//! Projectiles move first, then impacts resolve one projectile at a time so
//! an enemy killed by an earlier shot is not hit again this frame.

use hecs::{Entity, World};

use rampart_core::components::{Projectile, ProjectileKind};
use rampart_core::enums::Faction;
use rampart_core::status::StatusEffects;
use rampart_core::types::Body;

use crate::systems::query;

pub fn run(world: &mut World, dt: f32, field_width: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Flight
    let mut in_flight: Vec<(Entity, Body, Projectile)> = Vec::new();
    for (entity, (body, projectile)) in world.query_mut::<(&mut Body, &Projectile)>() {
        if projectile.faction != Faction::Tower {
            continue;
        }
        if projectile.spent {
            despawn_buffer.push(entity);
            continue;
        }
        body.center.x += projectile.direction * projectile.speed * dt;
        in_flight.push((entity, *body, projectile.clone()));
    }

    // Impact
    let enemies = query::live_enemies(world);
    for (entity, body, projectile) in &in_flight {
        let hit = enemies
            .iter()
            .find(|(enemy, enemy_body)| enemy_body.overlaps(body) && query::is_alive(world, *enemy));

        let Some(&(target, _)) = hit else {
            if query::outside_field(body, field_width) {
                despawn_buffer.push(*entity);
            }
            continue;
        };

        match projectile.kind {
            ProjectileKind::Plain => {
                query::damage_enemy(world, target, projectile.damage);
                knock_back(world, target);
            }
            ProjectileKind::Slow { duration, strength } => {
                if projectile.damage > 0 {
                    query::damage_enemy(world, target, projectile.damage);
                }
                if let Ok(mut status) = world.get::<&mut StatusEffects>(target) {
                    status.apply_slow(duration, strength);
                }
            }
            ProjectileKind::Aoe { radius } => {
                for (enemy, enemy_body) in &enemies {
                    if enemy_body.within_radius(body.center, radius)
                        && query::is_alive(world, *enemy)
                    {
                        query::damage_enemy(world, *enemy, projectile.damage);
                    }
                }
            }
        }

        if let Ok(mut projectile) = world.get::<&mut Projectile>(*entity) {
            projectile.spent = true;
        }
        despawn_buffer.push(*entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn knock_back(world: &World, entity: Entity) {
    if let Ok(mut status) = world.get::<&mut StatusEffects>(entity) {
        status.apply_knockback();
    }
}
