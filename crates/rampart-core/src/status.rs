//! Per-enemy timed modifiers: slow, heavy slow, knockback and attack cooldown.

use serde::{Deserialize, Serialize};

use crate::constants::{ATTACK_COOLDOWN, HEAVY_SLOW_STRENGTH, KNOCKBACK_DURATION, KNOCKBACK_SPEED};
use crate::enums::EffectTint;
use crate::types::count_down;

/// A timed speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slow {
    pub remaining: f32,
    /// Speed multiplier in (0, 1]; lower is stronger.
    pub strength: f32,
}

/// Status effect set owned by every enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEffects {
    pub slow: Option<Slow>,
    pub heavy_slow: Option<Slow>,
    pub knockback_remaining: f32,
    pub attack_cooldown: f32,
}

impl StatusEffects {
    /// Replace the current slow.
    pub fn apply_slow(&mut self, duration: f32, strength: f32) {
        if duration <= 0.0 {
            return;
        }
        self.slow = Some(Slow {
            remaining: duration,
            strength: strength.clamp(f32::EPSILON, 1.0),
        });
    }

    /// Replace the current heavy slow.
    pub fn apply_heavy_slow(&mut self, duration: f32) {
        if duration <= 0.0 {
            return;
        }
        self.heavy_slow = Some(Slow {
            remaining: duration,
            strength: HEAVY_SLOW_STRENGTH,
        });
    }

    /// Start a knockback and lock out attacks. Does not stack: returns
    /// `false` and changes nothing while a knockback is already running.
    pub fn apply_knockback(&mut self) -> bool {
        if self.is_knocked_back() {
            return false;
        }
        self.knockback_remaining = KNOCKBACK_DURATION;
        self.attack_cooldown = ATTACK_COOLDOWN;
        true
    }

    pub fn tick(&mut self, delta: f32) {
        count_down(&mut self.knockback_remaining, delta);
        count_down(&mut self.attack_cooldown, delta);
        self.slow = tick_slow(self.slow, delta);
        self.heavy_slow = tick_slow(self.heavy_slow, delta);
    }

    pub fn is_knocked_back(&self) -> bool {
        self.knockback_remaining > 0.0
    }

    pub fn is_slowed(&self) -> bool {
        self.slow.is_some() || self.heavy_slow.is_some()
    }

    pub fn can_attack(&self) -> bool {
        !self.is_knocked_back() && self.attack_cooldown <= 0.0
    }

    /// Signed leftward speed for this frame. Negative means pushed back.
    pub fn effective_speed(&self, base: f32) -> f32 {
        if self.is_knocked_back() {
            return -KNOCKBACK_SPEED;
        }
        if let Some(heavy) = self.heavy_slow {
            return base * heavy.strength;
        }
        if let Some(slow) = self.slow {
            return base * slow.strength;
        }
        base
    }

    pub fn tint(&self) -> EffectTint {
        if self.is_knocked_back() {
            EffectTint::KnockedBack
        } else if self.heavy_slow.is_some() {
            EffectTint::HeavySlowed
        } else if self.slow.is_some() {
            EffectTint::Slowed
        } else {
            EffectTint::None
        }
    }
}

fn tick_slow(slow: Option<Slow>, delta: f32) -> Option<Slow> {
    let mut slow = slow?;
    slow.remaining -= delta;
    (slow.remaining > 0.0).then_some(slow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knockback_does_not_stack() {
        let mut fx = StatusEffects::default();
        assert!(fx.apply_knockback());
        fx.tick(0.2);
        let remaining = fx.knockback_remaining;
        assert!(!fx.apply_knockback());
        assert_eq!(fx.knockback_remaining, remaining);
    }

    #[test]
    fn knockback_reverses_movement_and_blocks_attacks() {
        let mut fx = StatusEffects::default();
        fx.apply_knockback();
        assert!(fx.effective_speed(40.0) < 0.0);
        assert!(!fx.can_attack());

        fx.tick(KNOCKBACK_DURATION);
        assert!(!fx.is_knocked_back());
        assert_eq!(fx.effective_speed(40.0), 40.0);
        // attack lockout outlasts the knockback itself
        assert!(!fx.can_attack());
        fx.tick(ATTACK_COOLDOWN);
        assert!(fx.can_attack());
    }

    #[test]
    fn slow_overwrites_and_expires() {
        let mut fx = StatusEffects::default();
        fx.apply_slow(2.0, 0.5);
        fx.apply_slow(1.0, 0.8);
        assert_eq!(fx.effective_speed(100.0), 80.0);
        fx.tick(1.0);
        assert!(fx.slow.is_none());
        assert_eq!(fx.effective_speed(100.0), 100.0);
    }

    #[test]
    fn heavy_slow_dominates_light_slow() {
        let mut fx = StatusEffects::default();
        fx.apply_slow(3.0, 0.5);
        fx.apply_heavy_slow(1.0);
        assert!((fx.effective_speed(100.0) - 10.0).abs() < 1e-4);
        assert_eq!(fx.tint(), EffectTint::HeavySlowed);
        fx.tick(1.5);
        assert_eq!(fx.effective_speed(100.0), 50.0);
    }
}
