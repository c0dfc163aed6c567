//! Wave spawning system: feeds enemies into the field and tracks progression.
//!
//! One enemy spawns per interval (the first one interval after the wave
//! starts) until the wave quota is met. Once every spawned enemy is gone the
//! wave bonus is paid and, after a short delay, the next wave starts with a
//! larger quota. Clearing the final wave of the final stage is a victory.

use glam::Vec2;
use hecs::{Entity, World};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use rampart_core::components::Enemy;
use rampart_core::enums::EnemyCategory;
use rampart_core::events::GameEvent;

use crate::config::{SimConfig, StageTable};
use crate::economy::{ScoreState, Treasury};
use crate::scenario;
use crate::world_setup;

/// Progress through the campaign. Stage and wave are 1-based.
#[derive(Debug, Clone)]
pub struct WaveState {
    pub stage: u32,
    pub wave: u32,
    pub quota: u32,
    pub spawned: u32,
    /// Seconds until the next spawn.
    pub spawn_timer: f32,
    /// Countdown to the next wave once the current one is cleared.
    pub transition: Option<f32>,
    pub bonus_paid: bool,
    pub boss_spawned: bool,
}

impl WaveState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            stage: 1,
            wave: 1,
            quota: config.base_quota,
            spawned: 0,
            spawn_timer: config.spawn_interval,
            transition: None,
            bonus_paid: false,
            boss_spawned: false,
        }
    }

    pub fn waves_in_stage(&self, config: &SimConfig) -> u32 {
        self.table(config).map_or(0, |table| table.waves)
    }

    pub fn is_final_wave(&self, config: &SimConfig) -> bool {
        self.stage == config.stage_count() && self.wave == self.waves_in_stage(config)
    }

    fn table<'a>(&self, config: &'a SimConfig) -> Option<&'a StageTable> {
        config.stages.get(self.stage.saturating_sub(1) as usize)
    }

    fn boss_due(&self, config: &SimConfig) -> bool {
        !self.boss_spawned
            && self.is_final_wave(config)
            && self.spawned == scenario::boss_spawn_index(self.quota)
    }
}

/// Everything the spawner touches besides the world.
pub struct WaveContext<'a> {
    pub config: &'a SimConfig,
    pub rng: &'a mut ChaCha8Rng,
    pub treasury: &'a mut Treasury,
    pub score: &'a mut ScoreState,
    pub events: &'a mut Vec<GameEvent>,
    pub next_spawn_order: &'a mut u64,
    pub current_boss: &'a mut Option<Entity>,
}

/// Advance spawning and wave progression. Returns `true` on victory.
pub fn run(world: &mut World, state: &mut WaveState, ctx: WaveContext<'_>, dt: f32) -> bool {
    if let Some(remaining) = state.transition.as_mut() {
        *remaining -= dt;
        if *remaining <= 0.0 {
            advance_wave(ctx.config, state, ctx.events);
        }
        return false;
    }

    if state.spawned < state.quota {
        state.spawn_timer -= dt;
        if state.spawn_timer <= 0.0 {
            state.spawn_timer = ctx.config.spawn_interval;
            spawn_next(world, state, ctx);
        }
        return false;
    }

    let remaining = world.query::<&Enemy>().iter().count();
    if remaining > 0 {
        return false;
    }

    if !state.bonus_paid {
        state.bonus_paid = true;
        let bonus = ctx.config.wave_bonus;
        ctx.treasury.earn(bonus);
        ctx.score.record_earnings(bonus);
        info!(stage = state.stage, wave = state.wave, bonus, "wave complete");
        ctx.events.push(GameEvent::WaveComplete {
            stage: state.stage,
            wave: state.wave,
            bonus,
        });
    }

    if state.is_final_wave(ctx.config) {
        return true;
    }
    state.transition = Some(ctx.config.transition_delay);
    false
}

fn spawn_next(world: &mut World, state: &mut WaveState, ctx: WaveContext<'_>) {
    let category = if state.boss_due(ctx.config) {
        EnemyCategory::Boss
    } else {
        match state.table(ctx.config) {
            Some(table) => pick_category(ctx.rng, table),
            None => EnemyCategory::Basic,
        }
    };

    let layout = &ctx.config.layout;
    let lane = if layout.lanes.is_empty() {
        layout.height * 0.5
    } else {
        layout.lanes[ctx.rng.gen_range(0..layout.lanes.len())]
    };

    let spawn_order = *ctx.next_spawn_order;
    *ctx.next_spawn_order += 1;
    let entity =
        world_setup::spawn_enemy(world, category, Vec2::new(layout.width, lane), spawn_order);
    state.spawned += 1;

    debug!(?category, lane, spawn_order, "enemy spawned");
    ctx.events.push(GameEvent::EnemySpawned { category });
    if category == EnemyCategory::Boss {
        state.boss_spawned = true;
        *ctx.current_boss = Some(entity);
        info!(stage = state.stage, wave = state.wave, "boss spawned");
        ctx.events.push(GameEvent::BossSpawned);
    }
}

/// Weighted roll over the stage table. Boss weight is always zero.
pub fn pick_category(rng: &mut ChaCha8Rng, table: &StageTable) -> EnemyCategory {
    match WeightedIndex::new(&table.weights) {
        Ok(dist) => EnemyCategory::ALL[dist.sample(rng)],
        Err(_) => EnemyCategory::Basic,
    }
}

fn advance_wave(config: &SimConfig, state: &mut WaveState, events: &mut Vec<GameEvent>) {
    state.transition = None;
    state.wave += 1;
    if state.wave > state.waves_in_stage(config) {
        info!(stage = state.stage, "stage complete");
        events.push(GameEvent::StageComplete { stage: state.stage });
        state.stage += 1;
        state.wave = 1;
    }
    state.quota += config.quota_growth;
    state.spawned = 0;
    state.spawn_timer = config.spawn_interval;
    state.bonus_paid = false;
    debug!(stage = state.stage, wave = state.wave, quota = state.quota, "next wave");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn zero_weights_never_roll() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let table = StageTable {
            weights: [0, 0, 5, 0, 0],
            waves: 1,
        };
        for _ in 0..50 {
            assert_eq!(pick_category(&mut rng, &table), EnemyCategory::Bomber);
        }
    }

    #[test]
    fn final_wave_is_last_wave_of_last_stage() {
        let config = SimConfig::default();
        let mut state = WaveState::new(&config);
        assert!(!state.is_final_wave(&config));
        state.stage = config.stage_count();
        state.wave = state.waves_in_stage(&config);
        assert!(state.is_final_wave(&config));
    }
}
