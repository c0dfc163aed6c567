//! Tower fire system: targeting and launching.
//!
//! Every tower aims at the same target, the first live enemy in spawn
//! order, with no distance or lane priority. A tower launches whenever its
//! fire cooldown has run out and there is something to shoot at.

use glam::Vec2;
use hecs::World;
use tracing::trace;

use rampart_core::components::Tower;
use rampart_core::events::GameEvent;
use rampart_core::types::{count_down, Body, Health};

use crate::systems::query;
use crate::world_setup;

pub fn run(world: &mut World, dt: f32, events: &mut Vec<GameEvent>) {
    let target = query::live_enemies(world)
        .first()
        .map(|(_, body)| body.center);

    let mut launches: Vec<(Tower, Vec2, f32)> = Vec::new();

    for (_entity, (body, tower, health)) in world.query_mut::<(&Body, &mut Tower, &Health)>() {
        if !health.is_alive() {
            continue;
        }
        count_down(&mut tower.fire_cooldown, dt);
        let Some(target) = target else {
            continue;
        };
        if tower.fire_cooldown > 0.0 {
            continue;
        }
        tower.fire_cooldown = tower.fire_rate;
        launches.push((tower.clone(), body.center, target.x));
    }

    launches.sort_unstable_by_key(|(tower, _, _)| tower.build_order);
    for (tower, origin, target_x) in &launches {
        trace!(kind = ?tower.kind, target_x, "tower fired");
        world_setup::spawn_tower_projectile(world, tower, *origin, *target_x);
        events.push(GameEvent::TowerFired { kind: tower.kind });
    }
}
