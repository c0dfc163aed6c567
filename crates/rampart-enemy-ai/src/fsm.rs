//! Enemy behavior finite state machine.
//!
//! Pure functions that compute movement, phase transitions and fire
//! requests for one enemy from its category state and status effects.
//! No ECS dependency: operates on plain data. Tower contact, bomb drops
//! and sheltering are resolved by the orchestrator.

use glam::Vec2;

use rampart_core::components::EnemyBehavior;
use rampart_core::constants::*;
use rampart_core::enums::{BossPhase, ShooterPhase};
use rampart_core::status::StatusEffects;

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub behavior: EnemyBehavior,
    pub base_speed: f32,
    pub position: Vec2,
    /// Status effects, already ticked for this frame.
    pub status: StatusEffects,
    pub dt: f32,
}

/// A ranged shot the enemy wants fired toward the tower side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotRequest {
    pub origin: Vec2,
    pub damage: i32,
    pub speed: f32,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, Copy)]
pub struct EnemyUpdate {
    pub behavior: EnemyBehavior,
    pub position: Vec2,
    /// Signed leftward speed used this frame.
    pub speed: f32,
    pub shot: Option<ShotRequest>,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    match ctx.behavior {
        EnemyBehavior::Basic | EnemyBehavior::Bomber | EnemyBehavior::Shield => walk(ctx),
        EnemyBehavior::Shooter { phase, fire_timer } => match phase {
            ShooterPhase::Moving => evaluate_shooter_moving(ctx),
            ShooterPhase::Attacking => {
                let (fire_timer, shot) = fire_on_interval(
                    fire_timer,
                    ctx,
                    SHOOTER_FIRE_INTERVAL,
                    SHOOTER_SHOT_DAMAGE,
                    SHOOTER_SHOT_SPEED,
                );
                planted(
                    ctx,
                    EnemyBehavior::Shooter {
                        phase: ShooterPhase::Attacking,
                        fire_timer,
                    },
                    shot,
                )
            }
        },
        EnemyBehavior::Boss { phase, fire_timer } => match phase {
            BossPhase::Moving => evaluate_boss_moving(ctx),
            BossPhase::Stationary => {
                let (fire_timer, shot) = fire_on_interval(
                    fire_timer,
                    ctx,
                    BOSS_FIRE_INTERVAL,
                    BOSS_SHOT_DAMAGE,
                    BOSS_SHOT_SPEED,
                );
                planted(
                    ctx,
                    EnemyBehavior::Boss {
                        phase: BossPhase::Stationary,
                        fire_timer,
                    },
                    shot,
                )
            }
        },
    }
}

/// Constant leftward movement at the status-adjusted speed.
fn walk(ctx: &EnemyContext) -> EnemyUpdate {
    let speed = ctx.status.effective_speed(ctx.base_speed);
    EnemyUpdate {
        behavior: ctx.behavior,
        position: Vec2::new(ctx.position.x - speed * ctx.dt, ctx.position.y),
        speed,
        shot: None,
        phase_changed: false,
    }
}

fn evaluate_shooter_moving(ctx: &EnemyContext) -> EnemyUpdate {
    let mut update = walk(ctx);
    if update.position.x <= SHOOTER_FIRING_LINE_X {
        update.behavior = EnemyBehavior::Shooter {
            phase: ShooterPhase::Attacking,
            fire_timer: 0.0,
        };
        update.speed = 0.0;
        update.phase_changed = true;
    }
    update
}

fn evaluate_boss_moving(ctx: &EnemyContext) -> EnemyUpdate {
    let mut update = walk(ctx);
    if update.position.x <= BOSS_TARGET_X {
        update.position.x = BOSS_TARGET_X;
        update.behavior = EnemyBehavior::Boss {
            phase: BossPhase::Stationary,
            fire_timer: 0.0,
        };
        update.speed = 0.0;
        update.phase_changed = true;
    }
    update
}

/// Stationary states hold position regardless of knockback.
fn planted(ctx: &EnemyContext, behavior: EnemyBehavior, shot: Option<ShotRequest>) -> EnemyUpdate {
    EnemyUpdate {
        behavior,
        position: ctx.position,
        speed: 0.0,
        shot,
        phase_changed: false,
    }
}

fn fire_on_interval(
    fire_timer: f32,
    ctx: &EnemyContext,
    interval: f32,
    damage: i32,
    speed: f32,
) -> (f32, Option<ShotRequest>) {
    let timer = fire_timer - ctx.dt;
    if timer > 0.0 {
        return (timer, None);
    }
    let shot = ShotRequest {
        origin: ctx.position,
        damage,
        speed,
    };
    (interval, Some(shot))
}
