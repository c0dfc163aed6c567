//! Trap system: resolves enemy-vs-trap overlap.
//!
//! Each live enemy triggers at most the first ready trap it overlaps. A
//! trap fires once per frame at most; single-use traps disarm on firing.

use hecs::World;
use tracing::debug;

use rampart_core::components::Trap;
use rampart_core::constants::*;
use rampart_core::enums::TrapKind;
use rampart_core::events::GameEvent;
use rampart_core::status::StatusEffects;

use crate::systems::query;

pub fn run(world: &mut World, traps: &mut [Trap], events: &mut Vec<GameEvent>) {
    let enemies = query::live_enemies(world);

    for (entity, body) in &enemies {
        // An explosion earlier in this pass may have killed it.
        if !query::is_alive(world, *entity) {
            continue;
        }
        let rect = body.rect();
        let Some(trap) = traps
            .iter_mut()
            .find(|trap| trap.is_ready() && trap.zone.overlaps(&rect))
        else {
            continue;
        };
        let Some(kind) = trap.kind else {
            continue;
        };

        let profile = trap_profile(kind);
        if profile.single_use {
            trap.used = true;
            trap.occupied = false;
        } else {
            trap.cooldown = profile.trigger_cooldown;
        }
        let center = trap.center();

        match kind {
            TrapKind::Attack => {
                query::damage_enemy(world, *entity, ATTACK_TRAP_DAMAGE);
                if let Ok(mut status) = world.get::<&mut StatusEffects>(*entity) {
                    status.apply_slow(ATTACK_TRAP_SLOW_DURATION, ATTACK_TRAP_SLOW_STRENGTH);
                }
            }
            TrapKind::Slow => {
                if let Ok(mut status) = world.get::<&mut StatusEffects>(*entity) {
                    status.apply_heavy_slow(SLOW_TRAP_DURATION);
                }
            }
            TrapKind::Explosion => {
                for (other, other_body) in &enemies {
                    if other_body.within_radius(center, EXPLOSION_TRAP_RADIUS)
                        && query::is_alive(world, *other)
                    {
                        query::damage_enemy(world, *other, EXPLOSION_TRAP_DAMAGE);
                    }
                }
            }
        }

        debug!(?kind, x = center.x, y = center.y, "trap triggered");
        events.push(GameEvent::TrapTriggered { kind, at: center });
    }
}
