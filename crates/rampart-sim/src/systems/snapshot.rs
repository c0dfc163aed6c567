//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only; it never modifies the world.

use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::*;
use rampart_core::status::StatusEffects;
use rampart_core::types::{Body, Health, SimTime};

use crate::config::SimConfig;
use crate::economy::{ScoreState, Treasury};
use crate::systems::cooldowns::DeployCooldowns;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup::BuildZone;

/// Engine state the snapshot reads besides the world.
pub struct SnapshotSources<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub config: &'a SimConfig,
    pub treasury: &'a Treasury,
    pub score: &'a ScoreState,
    pub waves: &'a WaveState,
    pub cooldowns: &'a DeployCooldowns,
    pub build_zones: &'a [BuildZone],
    pub traps: &'a [Trap],
    pub current_boss: Option<Entity>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    sources: SnapshotSources<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *sources.time,
        phase: sources.phase,
        gold: sources.treasury.gold(),
        stage: sources.waves.stage,
        wave: sources.waves.wave,
        waves_in_stage: sources.waves.waves_in_stage(sources.config),
        stage_count: sources.config.stage_count(),
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        bombs: build_bombs(world),
        traps: build_traps(sources.traps),
        build_zones: sources
            .build_zones
            .iter()
            .map(|zone| BuildZoneView {
                zone: zone.rect,
                occupied: zone.is_occupied(),
            })
            .collect(),
        cooldowns: sources.cooldowns.view(),
        boss: sources.current_boss.and_then(|boss| build_boss(world, boss)),
        events,
        score: sources.score.view(),
    }
}

/// Enemies in spawn order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<(u64, EnemyView)> = world
        .query::<(&Body, &Health, &Enemy, &StatusEffects)>()
        .iter()
        .map(|(_, (body, health, enemy, status))| {
            (
                enemy.spawn_order,
                EnemyView {
                    category: enemy.category(),
                    position: body.center,
                    size: body.size(),
                    health: health.current,
                    max_health: health.max,
                    state: enemy.behavior.state_name().to_string(),
                    tint: status.tint(),
                },
            )
        })
        .collect();
    enemies.sort_unstable_by_key(|(order, _)| *order);
    enemies.into_iter().map(|(_, view)| view).collect()
}

/// Towers in build order; the main tower comes first.
fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<(u64, TowerView)> = world
        .query::<(&Body, &Health, &Tower)>()
        .iter()
        .map(|(_, (body, health, tower))| {
            (
                tower.build_order,
                TowerView {
                    kind: tower.kind,
                    position: body.center,
                    size: body.size(),
                    health: health.current,
                    max_health: health.max,
                    damage: tower.damage,
                    fire_rate: tower.fire_rate,
                    upgrades: tower.upgrades,
                    is_main: tower.is_main,
                },
            )
        })
        .collect();
    towers.sort_unstable_by_key(|(order, _)| *order);
    towers.into_iter().map(|(_, view)| view).collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Body, &Projectile)>()
        .iter()
        .map(|(_, (body, projectile))| ProjectileView {
            faction: projectile.faction,
            kind: projectile.kind,
            position: body.center,
        })
        .collect()
}

fn build_bombs(world: &World) -> Vec<BombView> {
    world
        .query::<(&Body, &Bomb)>()
        .iter()
        .map(|(_, (body, bomb))| BombView {
            position: body.center,
            landed: bomb.landed,
        })
        .collect()
}

fn build_traps(traps: &[Trap]) -> Vec<TrapView> {
    traps
        .iter()
        .map(|trap| TrapView {
            zone: trap.zone,
            kind: trap.kind.filter(|_| trap.occupied),
            armed: trap.occupied && !trap.used,
            cooldown: trap.cooldown,
        })
        .collect()
}

fn build_boss(world: &World, boss: Entity) -> Option<BossView> {
    let mut query = world.query_one::<(&Health, &Enemy)>(boss).ok()?;
    let (health, enemy) = query.get()?;
    Some(BossView {
        health: health.current,
        max_health: health.max,
        state: enemy.behavior.state_name().to_string(),
        reached_target: enemy.behavior.has_reached_target(),
    })
}
