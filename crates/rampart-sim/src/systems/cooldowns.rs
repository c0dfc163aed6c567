//! Cooldown system: deploy cooldowns per tower/trap type and trap re-arm timers.

use rampart_core::components::Trap;
use rampart_core::constants::{tower_profile, trap_profile};
use rampart_core::enums::{TowerKind, TrapKind};
use rampart_core::state::CooldownView;
use rampart_core::types::count_down;

/// Seconds remaining before each type may be deployed again.
#[derive(Debug, Clone, Default)]
pub struct DeployCooldowns {
    towers: [f32; 4],
    traps: [f32; 3],
}

impl DeployCooldowns {
    pub fn tower(&self, kind: TowerKind) -> f32 {
        self.towers[kind.index()]
    }

    pub fn trap(&self, kind: TrapKind) -> f32 {
        self.traps[kind.index()]
    }

    pub fn start_tower(&mut self, kind: TowerKind) {
        self.towers[kind.index()] = tower_profile(kind).deploy_cooldown;
    }

    pub fn start_trap(&mut self, kind: TrapKind) {
        self.traps[kind.index()] = trap_profile(kind).deploy_cooldown;
    }

    pub fn view(&self) -> CooldownView {
        CooldownView {
            towers: self.towers,
            traps: self.traps,
        }
    }
}

pub fn run(cooldowns: &mut DeployCooldowns, traps: &mut [Trap], dt: f32) {
    for timer in cooldowns.towers.iter_mut().chain(cooldowns.traps.iter_mut()) {
        count_down(timer, dt);
    }
    for trap in traps.iter_mut() {
        count_down(&mut trap.cooldown, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_cooldown_counts_down_to_zero() {
        let mut cooldowns = DeployCooldowns::default();
        cooldowns.start_tower(TowerKind::Basic);
        assert_eq!(cooldowns.tower(TowerKind::Basic), 5.0);
        assert_eq!(cooldowns.tower(TowerKind::Fast), 0.0);

        run(&mut cooldowns, &mut [], 2.0);
        assert_eq!(cooldowns.tower(TowerKind::Basic), 3.0);
        run(&mut cooldowns, &mut [], 10.0);
        assert_eq!(cooldowns.tower(TowerKind::Basic), 0.0);
    }
}
