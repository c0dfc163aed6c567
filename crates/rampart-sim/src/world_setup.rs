//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the main tower, player towers, enemies, projectiles and bombs
//! with appropriate component bundles. Build zones and trap slots are
//! plain engine-owned data, also laid out here.

use glam::Vec2;
use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::constants::*;
use rampart_core::enums::*;
use rampart_core::status::StatusEffects;
use rampart_core::types::{Body, Health, Rect};

use rampart_enemy_ai::fsm::ShotRequest;
use rampart_enemy_ai::profiles::get_profile;

use crate::config::FieldLayout;

/// A rectangle a single tower may be built in.
#[derive(Debug, Clone)]
pub struct BuildZone {
    pub rect: Rect,
    pub occupant: Option<Entity>,
}

impl BuildZone {
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

pub fn build_zones(layout: &FieldLayout) -> Vec<BuildZone> {
    layout
        .build_zones
        .iter()
        .map(|&rect| BuildZone {
            rect,
            occupant: None,
        })
        .collect()
}

pub fn trap_slots(layout: &FieldLayout) -> Vec<Trap> {
    layout.trap_zones.iter().map(|&zone| Trap::empty(zone)).collect()
}

fn size_of((w, h): (f32, f32)) -> Vec2 {
    Vec2::new(w, h)
}

/// Spawn the main structure. It fires like a Basic tower and has no zone.
pub fn spawn_main_tower(world: &mut World, at: Vec2, build_order: u64) -> Entity {
    let profile = tower_profile(TowerKind::Basic);
    world.spawn((
        Body::new(at, size_of(MAIN_TOWER_SIZE)),
        Health::new(MAIN_TOWER_HEALTH),
        Tower {
            kind: TowerKind::Basic,
            damage: profile.damage,
            fire_rate: profile.fire_rate,
            fire_cooldown: 0.0,
            upgrades: TowerUpgrades::default(),
            is_main: true,
            zone: None,
            invested: 0,
            build_order,
        },
    ))
}

/// Spawn a player tower centered in its build zone.
pub fn spawn_tower(
    world: &mut World,
    kind: TowerKind,
    at: Vec2,
    zone: usize,
    build_order: u64,
) -> Entity {
    let profile = tower_profile(kind);
    world.spawn((
        Body::new(at, size_of(TOWER_SIZE)),
        Health::new(profile.health),
        Tower {
            kind,
            damage: profile.damage,
            fire_rate: profile.fire_rate,
            fire_cooldown: 0.0,
            upgrades: TowerUpgrades::default(),
            is_main: false,
            zone: Some(zone),
            invested: profile.cost,
            build_order,
        },
    ))
}

/// Spawn-enemy factory: a fresh enemy of `category` at `position`.
pub fn spawn_enemy(
    world: &mut World,
    category: EnemyCategory,
    position: Vec2,
    spawn_order: u64,
) -> Entity {
    let profile = get_profile(category);
    world.spawn((
        Body::new(position, profile.size),
        Health::new(profile.health),
        Enemy {
            behavior: EnemyBehavior::for_category(category),
            base_speed: profile.speed,
            speed: profile.speed,
            spawn_order,
        },
        StatusEffects::default(),
    ))
}

/// Launch a tower projectile from `origin` toward `target_x`.
/// Direction is fixed at launch; it never homes.
pub fn spawn_tower_projectile(
    world: &mut World,
    tower: &Tower,
    origin: Vec2,
    target_x: f32,
) -> Entity {
    let profile = tower_profile(tower.kind);
    let direction = if target_x < origin.x { -1.0 } else { 1.0 };
    world.spawn((
        Body::new(origin, size_of(PROJECTILE_SIZE)),
        Projectile {
            faction: Faction::Tower,
            kind: profile.projectile,
            direction,
            speed: profile.projectile_speed,
            damage: tower.damage,
            spent: false,
        },
    ))
}

/// Turn an enemy's shot request into a leftward projectile.
pub fn spawn_enemy_projectile(world: &mut World, shot: &ShotRequest) -> Entity {
    world.spawn((
        Body::new(shot.origin, size_of(ENEMY_SHOT_SIZE)),
        Projectile {
            faction: Faction::Enemy,
            kind: ProjectileKind::Plain,
            direction: -1.0,
            speed: shot.speed,
            damage: shot.damage,
            spent: false,
        },
    ))
}

/// Drop a bomb that will land on `landing`.
pub fn spawn_bomb(world: &mut World, landing: Vec2) -> Entity {
    let drawn = Vec2::new(landing.x, landing.y - BOMB_DROP_HEIGHT);
    world.spawn((
        Body::new(drawn, size_of(BOMB_SIZE)),
        Bomb {
            landing,
            altitude: BOMB_DROP_HEIGHT,
            fall_speed: 0.0,
            landed: false,
            exploded: false,
        },
    ))
}
