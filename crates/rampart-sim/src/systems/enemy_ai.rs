//! Enemy AI system: moves every enemy, resolves tower contact and escapes.
//!
//! Calls the enemy FSM from rampart-enemy-ai for movement, phase changes and
//! shot requests, then applies the results to ECS components. Structural
//! changes (projectiles, bombs, removals, tower damage) are collected and
//! applied after the pass.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, info};

use rampart_core::components::Enemy;
use rampart_core::constants::CONTACT_DAMAGE;
use rampart_core::enums::EnemyCategory;
use rampart_core::events::GameEvent;
use rampart_core::status::StatusEffects;
use rampart_core::types::{Body, Health};

use rampart_enemy_ai::fsm::{evaluate, EnemyContext, ShotRequest};
use rampart_enemy_ai::protection::{seek_protection, Seeker};

use crate::economy::ScoreState;
use crate::systems::query;
use crate::world_setup;

/// Run the enemy pass: FSM tick, movement, contact, escapes.
pub fn run(
    world: &mut World,
    dt: f32,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut towers = query::live_towers(world);
    let mut order: Vec<(u64, Entity)> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, enemy)| (enemy.spawn_order, entity))
        .collect();
    order.sort_unstable_by_key(|(spawn_order, _)| *spawn_order);

    let mut shots: Vec<ShotRequest> = Vec::new();
    let mut bomb_drops: Vec<Vec2> = Vec::new();
    let mut tower_hits: Vec<(Entity, i32)> = Vec::new();

    for (_, entity) in order {
        let (body, enemy, status, health) = match world
            .query_one_mut::<(&mut Body, &mut Enemy, &mut StatusEffects, &Health)>(entity)
        {
            Ok(components) => components,
            Err(_) => continue,
        };
        if !health.is_alive() {
            continue;
        }

        status.tick(dt);
        let ctx = EnemyContext {
            behavior: enemy.behavior,
            base_speed: enemy.base_speed,
            position: body.center,
            status: *status,
            dt,
        };
        let update = evaluate(&ctx);
        enemy.behavior = update.behavior;
        enemy.speed = update.speed;
        body.center = update.position;

        let category = enemy.category();
        if let Some(shot) = update.shot {
            shots.push(shot);
            events.push(GameEvent::EnemyFired { category });
        }
        if update.phase_changed && update.behavior.has_reached_target() {
            info!(x = body.center.x, "boss reached its target line");
            events.push(GameEvent::BossArrived);
        }

        // Walked off the left edge un-killed: no reward.
        if body.rect().max.x < 0.0 {
            debug!(?category, "enemy escaped");
            score.escaped += 1;
            events.push(GameEvent::EnemyEscaped { category });
            despawn_buffer.push(entity);
            continue;
        }

        let enemy_body = *body;
        let contact = towers
            .iter_mut()
            .find(|tower| tower.is_alive() && tower.body.overlaps(&enemy_body));
        let Some(tower) = contact else {
            continue;
        };

        if category == EnemyCategory::Bomber {
            let at = enemy_body.center;
            debug!(x = at.x, y = at.y, "bomber dropped its bomb");
            bomb_drops.push(at);
            events.push(GameEvent::BombDropped { at });
            despawn_buffer.push(entity);
        } else if status.can_attack() {
            tower.health -= CONTACT_DAMAGE;
            tower_hits.push((tower.entity, CONTACT_DAMAGE));
            status.apply_knockback();
        }
    }

    query::apply_tower_damage(world, &tower_hits);
    for shot in &shots {
        world_setup::spawn_enemy_projectile(world, shot);
    }
    for &landing in &bomb_drops {
        world_setup::spawn_bomb(world, landing);
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Seek protection: Basic enemies tuck in behind the nearest Shield.
pub fn shelter(world: &mut World) {
    let mut seekers: Vec<Seeker<Entity>> = Vec::new();
    let mut shields: Vec<Body> = Vec::new();
    {
        let mut enemies = world.query::<(&Body, &Enemy, &StatusEffects, &Health)>();
        for (entity, (body, enemy, status, health)) in enemies.iter() {
            if !health.is_alive() {
                continue;
            }
            match enemy.category() {
                EnemyCategory::Basic => seekers.push(Seeker {
                    id: entity,
                    body: *body,
                    knocked_back: status.is_knocked_back(),
                }),
                EnemyCategory::Shield => shields.push(*body),
                _ => {}
            }
        }
    }

    for (entity, target) in seek_protection(&seekers, &shields) {
        if let Ok(mut body) = world.get::<&mut Body>(entity) {
            body.center = target;
        }
    }
}
