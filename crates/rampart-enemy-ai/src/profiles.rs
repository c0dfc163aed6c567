//! Category-specific stat profiles.

use glam::Vec2;

use rampart_core::enums::EnemyCategory;

/// Spawn stats for an enemy category.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    pub health: i32,
    /// Base leftward speed (px/s).
    pub speed: f32,
    pub size: Vec2,
    /// Gold paid out when killed.
    pub reward: u32,
}

/// Get the stat profile for a given category.
pub fn get_profile(category: EnemyCategory) -> EnemyProfile {
    match category {
        EnemyCategory::Basic => EnemyProfile {
            health: 3,
            speed: 40.0,
            size: Vec2::new(40.0, 40.0),
            reward: 10,
        },
        EnemyCategory::Shooter => EnemyProfile {
            health: 2,
            speed: 35.0,
            size: Vec2::new(40.0, 48.0),
            reward: 15,
        },
        EnemyCategory::Bomber => EnemyProfile {
            health: 2,
            speed: 55.0,
            size: Vec2::new(44.0, 36.0),
            reward: 15,
        },
        // slow and tanky, mostly there to shelter Basics
        EnemyCategory::Shield => EnemyProfile {
            health: 8,
            speed: 25.0,
            size: Vec2::new(52.0, 64.0),
            reward: 20,
        },
        EnemyCategory::Boss => EnemyProfile {
            health: 40,
            speed: 20.0,
            size: Vec2::new(110.0, 130.0),
            reward: 100,
        },
    }
}
