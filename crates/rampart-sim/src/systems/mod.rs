//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only) plus whatever engine-owned state they touch. They iterate
//! first and apply structural changes afterwards.

pub mod bombs;
pub mod cleanup;
pub mod cooldowns;
pub mod enemy_ai;
pub mod enemy_fire;
pub mod income;
pub mod projectiles;
pub mod query;
pub mod snapshot;
pub mod tower_fire;
pub mod traps;
pub mod wave_spawner;
