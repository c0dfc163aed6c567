//! Bomb system: falling ordnance dropped by Bombers.
//!
//! A bomb accelerates toward its landing point and explodes the frame it
//! touches down, damaging every live tower within the blast radius.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::debug;

use rampart_core::components::Bomb;
use rampart_core::constants::{BOMB_BLAST_RADIUS, BOMB_DAMAGE, BOMB_GRAVITY};
use rampart_core::events::GameEvent;
use rampart_core::types::Body;

use crate::systems::query;

pub fn run(
    world: &mut World,
    dt: f32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut towers = query::live_towers(world);
    let mut tower_hits: Vec<(Entity, i32)> = Vec::new();

    for (entity, (body, bomb)) in world.query_mut::<(&mut Body, &mut Bomb)>() {
        if bomb.exploded {
            despawn_buffer.push(entity);
            continue;
        }

        bomb.fall_speed += BOMB_GRAVITY * dt;
        bomb.altitude -= bomb.fall_speed * dt;
        if bomb.altitude <= 0.0 {
            bomb.altitude = 0.0;
            bomb.landed = true;
        }
        body.center = Vec2::new(bomb.landing.x, bomb.landing.y - bomb.altitude);

        if !bomb.landed {
            continue;
        }

        bomb.exploded = true;
        let at = bomb.landing;
        let mut towers_hit = 0;
        for tower in towers
            .iter_mut()
            .filter(|tower| tower.is_alive() && tower.body.within_radius(at, BOMB_BLAST_RADIUS))
        {
            tower.health -= BOMB_DAMAGE;
            tower_hits.push((tower.entity, BOMB_DAMAGE));
            towers_hit += 1;
        }
        debug!(x = at.x, y = at.y, towers_hit, "bomb exploded");
        events.push(GameEvent::BombExploded { at, towers_hit });
        despawn_buffer.push(entity);
    }

    query::apply_tower_damage(world, &tower_hits);
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
