#[cfg(test)]
mod tests {
    use glam::Vec2;

    use rampart_core::components::EnemyBehavior;
    use rampart_core::constants::*;
    use rampart_core::enums::{BossPhase, EnemyCategory, ShooterPhase};
    use rampart_core::status::StatusEffects;
    use rampart_core::types::Body;

    use crate::fsm::{evaluate, EnemyContext};
    use crate::profiles::get_profile;
    use crate::protection::{seek_protection, Seeker};

    fn make_context(behavior: EnemyBehavior, x: f32, dt: f32) -> EnemyContext {
        EnemyContext {
            behavior,
            base_speed: get_profile(behavior.category()).speed,
            position: Vec2::new(x, 360.0),
            status: StatusEffects::default(),
            dt,
        }
    }

    #[test]
    fn test_basic_walks_left_at_base_speed() {
        let ctx = make_context(EnemyBehavior::Basic, 1000.0, 0.5);
        let update = evaluate(&ctx);
        assert_eq!(update.position.x, 1000.0 - 40.0 * 0.5);
        assert_eq!(update.position.y, 360.0);
        assert!(update.shot.is_none());
        assert!(!update.phase_changed);
    }

    #[test]
    fn test_slowed_enemy_moves_at_reduced_speed() {
        let mut ctx = make_context(EnemyBehavior::Shield, 1000.0, 1.0);
        ctx.status.apply_slow(2.0, 0.5);
        let update = evaluate(&ctx);
        assert_eq!(update.speed, 12.5);
        assert_eq!(update.position.x, 987.5);
    }

    #[test]
    fn test_knocked_back_enemy_moves_right() {
        let mut ctx = make_context(EnemyBehavior::Basic, 500.0, 0.1);
        ctx.status.apply_knockback();
        let update = evaluate(&ctx);
        assert!(update.position.x > 500.0);
        assert!(update.speed < 0.0);
    }

    #[test]
    fn test_shooter_plants_past_firing_line() {
        let behavior = EnemyBehavior::for_category(EnemyCategory::Shooter);
        let ctx = make_context(behavior, SHOOTER_FIRING_LINE_X + 1.0, 0.1);
        let update = evaluate(&ctx);
        assert!(update.phase_changed);
        assert_eq!(update.speed, 0.0);
        assert!(matches!(
            update.behavior,
            EnemyBehavior::Shooter {
                phase: ShooterPhase::Attacking,
                ..
            }
        ));
    }

    #[test]
    fn test_shooter_keeps_moving_before_firing_line() {
        let behavior = EnemyBehavior::for_category(EnemyCategory::Shooter);
        let ctx = make_context(behavior, 1200.0, 0.1);
        let update = evaluate(&ctx);
        assert!(!update.phase_changed);
        assert_eq!(update.behavior, behavior);
    }

    #[test]
    fn test_attacking_shooter_fires_on_interval_and_never_moves() {
        let mut behavior = EnemyBehavior::Shooter {
            phase: ShooterPhase::Attacking,
            fire_timer: 0.0,
        };
        let mut shots = 0;
        // 10 seconds at 10 fps
        for _ in 0..100 {
            let mut ctx = make_context(behavior, 850.0, 0.1);
            ctx.status.apply_knockback();
            let update = evaluate(&ctx);
            assert_eq!(update.position.x, 850.0);
            if let Some(shot) = update.shot {
                assert_eq!(shot.damage, SHOOTER_SHOT_DAMAGE);
                shots += 1;
            }
            behavior = update.behavior;
        }
        assert_eq!(shots, 5);
    }

    #[test]
    fn test_boss_halts_at_target_and_reports_it() {
        let behavior = EnemyBehavior::for_category(EnemyCategory::Boss);
        let ctx = make_context(behavior, BOSS_TARGET_X + 0.5, 0.1);
        let update = evaluate(&ctx);
        assert!(update.phase_changed);
        assert_eq!(update.position.x, BOSS_TARGET_X);
        assert!(update.behavior.has_reached_target());

        let ctx = make_context(update.behavior, update.position.x, 0.1);
        let next = evaluate(&ctx);
        assert_eq!(next.position.x, BOSS_TARGET_X);
        let shot = next.shot.expect("boss fires once planted");
        assert_eq!(shot.damage, BOSS_SHOT_DAMAGE);
        assert!(matches!(
            next.behavior,
            EnemyBehavior::Boss {
                phase: BossPhase::Stationary,
                fire_timer,
            } if fire_timer == BOSS_FIRE_INTERVAL
        ));
    }

    // ---- Seek protection ----

    fn body_at(x: f32, y: f32, size: Vec2) -> Body {
        Body::new(Vec2::new(x, y), size)
    }

    #[test]
    fn test_basic_tucks_behind_nearest_shield() {
        let basic_size = get_profile(EnemyCategory::Basic).size;
        let shield_size = get_profile(EnemyCategory::Shield).size;
        let seekers = [Seeker {
            id: 7u32,
            body: body_at(700.0, 200.0, basic_size),
            knocked_back: false,
        }];
        let shields = [
            body_at(850.0, 520.0, shield_size),
            body_at(650.0, 360.0, shield_size),
        ];

        let moves = seek_protection(&seekers, &shields);
        assert_eq!(moves.len(), 1);
        let (id, target) = moves[0];
        assert_eq!(id, 7);
        let expected_x = 650.0 + shield_size.x / 2.0 + basic_size.x / 2.0 + PROTECTION_GAP;
        assert_eq!(target, Vec2::new(expected_x, 360.0));
    }

    #[test]
    fn test_shields_outside_band_are_ignored() {
        let size = Vec2::splat(40.0);
        let seekers = [Seeker {
            id: 1u32,
            body: body_at(300.0, 200.0, size),
            knocked_back: false,
        }];
        let shields = [body_at(300.0 + PROTECTION_BAND + 1.0, 200.0, size)];
        assert!(seek_protection(&seekers, &shields).is_empty());
    }

    #[test]
    fn test_knocked_back_seekers_stay_put() {
        let size = Vec2::splat(40.0);
        let seekers = [Seeker {
            id: 1u32,
            body: body_at(300.0, 200.0, size),
            knocked_back: true,
        }];
        let shields = [body_at(320.0, 200.0, size)];
        assert!(seek_protection(&seekers, &shields).is_empty());
    }
}
