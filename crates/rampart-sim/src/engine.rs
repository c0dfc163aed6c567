//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the economy, the build and
//! trap zones and wave progression. It processes player actions, runs all
//! systems in a fixed order once per frame, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use rampart_core::commands::PlayerCommand;
use rampart_core::components::{Tower, Trap};
use rampart_core::constants::*;
use rampart_core::enums::{GamePhase, TowerKind, TrapKind, UpgradeStat};
use rampart_core::error::ActionError;
use rampart_core::events::GameEvent;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::{Body, Health, SimTime};

use crate::config::{ConfigError, SimConfig};
use crate::economy::{ScoreState, Treasury};
use crate::systems;
use crate::systems::cooldowns::DeployCooldowns;
use crate::systems::snapshot::SnapshotSources;
use crate::systems::wave_spawner::{WaveContext, WaveState};
use crate::world_setup::{self, BuildZone};

/// Receives every game event in emission order, once per frame.
/// Audio and presentation hook in here without the engine knowing them.
/// Sinks are `Send` so the engine can be moved onto a game-loop thread.
pub trait EventSink: Send {
    fn notify(&mut self, event: &GameEvent);
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    config: SimConfig,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    sink: Option<Box<dyn EventSink>>,

    treasury: Treasury,
    score: ScoreState,
    waves: WaveState,
    cooldowns: DeployCooldowns,
    build_zones: Vec<BuildZone>,
    traps: Vec<Trap>,
    main_tower: Option<Entity>,
    current_boss: Option<Entity>,
    next_spawn_order: u64,
    next_build_order: u64,
}

impl SimulationEngine {
    /// Create a new engine and lay out the field. The game waits in
    /// `Briefing` until a `StartGame` command arrives.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let main_tower = world_setup::spawn_main_tower(&mut world, config.layout.main_tower, 0);
        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            sink: None,
            treasury: Treasury::new(config.starting_gold),
            score: ScoreState::default(),
            waves: WaveState::new(&config),
            cooldowns: DeployCooldowns::default(),
            build_zones: world_setup::build_zones(&config.layout),
            traps: world_setup::trap_slots(&config.layout),
            main_tower: Some(main_tower),
            current_boss: None,
            next_spawn_order: 0,
            next_build_order: 1,
            config,
        }
    }

    /// Validate the config first.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an engine that forwards every event to `sink`.
    pub fn with_sink(config: SimConfig, sink: Box<dyn EventSink>) -> Self {
        let mut engine = Self::new(config);
        engine.sink = Some(sink);
        engine
    }

    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Queue a player command for processing at the start of the next frame.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `delta` is clamped to `[0, MAX_FRAME_DELTA]`. Paused and finished
    /// games only advance the wall clock.
    pub fn update(&mut self, delta: f32) -> GameStateSnapshot {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.time.real_secs += f64::from(delta);

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(delta);
            self.time.advance(delta);
        }

        let events = std::mem::take(&mut self.events);
        if let Some(sink) = self.sink.as_mut() {
            for event in &events {
                sink.notify(event);
            }
        }
        self.snapshot(events)
    }

    // --- Queries ---

    pub fn gold(&self) -> u32 {
        self.treasury.gold()
    }

    pub fn stage(&self) -> u32 {
        self.waves.stage
    }

    pub fn wave(&self) -> u32 {
        self.waves.wave
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn is_game_won(&self) -> bool {
        self.phase == GamePhase::Victory
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds until another tower of `kind` may be deployed.
    pub fn tower_cooldown(&self, kind: TowerKind) -> f32 {
        self.cooldowns.tower(kind)
    }

    /// Seconds until another trap of `kind` may be deployed.
    pub fn trap_cooldown(&self, kind: TrapKind) -> f32 {
        self.cooldowns.trap(kind)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn waves(&self) -> &WaveState {
        &self.waves
    }

    pub fn build_zones(&self) -> &[BuildZone] {
        &self.build_zones
    }

    pub fn traps(&self) -> &[Trap] {
        &self.traps
    }

    pub fn main_tower(&self) -> Option<Entity> {
        self.main_tower
    }

    pub fn current_boss(&self) -> Option<Entity> {
        self.current_boss
    }

    /// The tower whose body contains `at`, else the occupant of the build
    /// zone containing `at`.
    pub fn tower_at(&self, at: Vec2) -> Option<Entity> {
        let mut hit: Option<(u64, Entity)> = None;
        for (entity, (body, tower)) in self.world.query::<(&Body, &Tower)>().iter() {
            if body.rect().contains(at) && hit.map_or(true, |(order, _)| tower.build_order < order)
            {
                hit = Some((tower.build_order, entity));
            }
        }
        hit.map(|(_, entity)| entity).or_else(|| {
            self.build_zones
                .iter()
                .find(|zone| zone.rect.contains(at))
                .and_then(|zone| zone.occupant)
        })
    }

    // --- Player actions ---

    /// Build a tower in the free build zone containing `at`.
    pub fn try_deploy_tower(&mut self, kind: TowerKind, at: Vec2) -> Result<Entity, ActionError> {
        self.ensure_open()?;
        let remaining = self.cooldowns.tower(kind);
        if remaining > 0.0 {
            return Err(ActionError::OnCooldown { remaining });
        }
        let index = self
            .build_zones
            .iter()
            .position(|zone| zone.rect.contains(at))
            .ok_or(ActionError::OutsideZone)?;
        if self.build_zones[index].is_occupied() {
            return Err(ActionError::ZoneOccupied);
        }
        self.treasury.spend(tower_profile(kind).cost)?;

        let center = self.build_zones[index].rect.center();
        let build_order = self.next_build_order;
        self.next_build_order += 1;
        let entity = world_setup::spawn_tower(&mut self.world, kind, center, index, build_order);
        self.build_zones[index].occupant = Some(entity);
        self.cooldowns.start_tower(kind);

        debug!(?kind, zone = index, gold = self.treasury.gold(), "tower deployed");
        self.events.push(GameEvent::TowerDeployed { kind });
        Ok(entity)
    }

    /// Arm the empty trap zone containing `at`. Returns the trap index.
    pub fn try_deploy_trap(&mut self, kind: TrapKind, at: Vec2) -> Result<usize, ActionError> {
        self.ensure_open()?;
        let remaining = self.cooldowns.trap(kind);
        if remaining > 0.0 {
            return Err(ActionError::OnCooldown { remaining });
        }
        let index = self
            .traps
            .iter()
            .position(|trap| trap.zone.contains(at))
            .ok_or(ActionError::OutsideZone)?;
        if self.traps[index].occupied {
            return Err(ActionError::ZoneOccupied);
        }
        let cost = trap_profile(kind).cost;
        self.treasury.spend(cost)?;

        let trap = &mut self.traps[index];
        trap.kind = Some(kind);
        trap.occupied = true;
        trap.used = false;
        trap.cooldown = 0.0;
        trap.invested = cost;
        self.cooldowns.start_trap(kind);

        debug!(?kind, trap = index, gold = self.treasury.gold(), "trap armed");
        self.events.push(GameEvent::TrapArmed { kind });
        Ok(index)
    }

    /// Raise one stat of a tower. Returns the gold paid.
    pub fn try_upgrade(&mut self, tower: Entity, stat: UpgradeStat) -> Result<u32, ActionError> {
        self.ensure_open()?;
        let (tower, health) = self
            .world
            .query_one_mut::<(&mut Tower, &mut Health)>(tower)
            .map_err(|_| ActionError::UnknownTower)?;

        let level = tower.upgrades.level_for(stat);
        if level >= MAX_STAT_LEVEL {
            return Err(ActionError::StatMaxed);
        }
        if tower.upgrades.slots_used() >= MAX_UPGRADE_SLOTS {
            return Err(ActionError::UpgradeSlotsExhausted);
        }
        let cost = upgrade_cost(stat, level);
        self.treasury.spend(cost)?;

        let level = level + 1;
        tower.upgrades.set_level(stat, level);
        tower.invested += cost;
        match stat {
            UpgradeStat::Attack => tower.damage += 1,
            UpgradeStat::Defense => health.raise_max(1),
            UpgradeStat::Speed => {
                tower.fire_rate = (tower.fire_rate - SPEED_UPGRADE_STEP).max(MIN_FIRE_RATE)
            }
        }

        let kind = tower.kind;
        debug!(?kind, ?stat, level, cost, "tower upgraded");
        self.events.push(GameEvent::TowerUpgraded { kind, stat, level });
        Ok(cost)
    }

    /// Remove the tower or armed trap at `at`. Returns the refund.
    /// The main tower can never be removed.
    pub fn try_remove_at(&mut self, at: Vec2) -> Result<u32, ActionError> {
        self.ensure_open()?;

        if let Some(entity) = self.tower_at(at) {
            let tower = self
                .world
                .get::<&Tower>(entity)
                .map(|tower| (*tower).clone())
                .map_err(|_| ActionError::NothingToRemove)?;
            if tower.is_main {
                return Err(ActionError::MainTowerProtected);
            }
            let _ = self.world.despawn(entity);
            if let Some(zone) = tower.zone.and_then(|index| self.build_zones.get_mut(index)) {
                zone.occupant = None;
            }
            return Ok(self.refund(tower.invested));
        }

        let armed = self
            .traps
            .iter()
            .position(|trap| trap.occupied && trap.zone.contains(at));
        if let Some(index) = armed {
            let invested = self.traps[index].invested;
            self.traps[index] = Trap::empty(self.traps[index].zone);
            return Ok(self.refund(invested));
        }

        Err(ActionError::NothingToRemove)
    }

    fn refund(&mut self, invested: u32) -> u32 {
        let refund = (invested as f32 * REFUND_RATIO).floor() as u32;
        self.treasury.earn(refund);
        debug!(refund, gold = self.treasury.gold(), "defense removed");
        self.events.push(GameEvent::DefenseRemoved { refund });
        refund
    }

    fn ensure_open(&self) -> Result<(), ActionError> {
        if self.phase.is_over() {
            return Err(ActionError::GameNotActive);
        }
        Ok(())
    }

    /// Spawn an enemy outside the wave schedule (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        category: rampart_core::enums::EnemyCategory,
        position: Vec2,
    ) -> Entity {
        let spawn_order = self.next_spawn_order;
        self.next_spawn_order += 1;
        world_setup::spawn_enemy(&mut self.world, category, position, spawn_order)
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Refusals become `ActionRejected` events.
    fn handle_command(&mut self, command: PlayerCommand) {
        let result = match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Briefing {
                    info!(seed = self.config.seed, "game started");
                    self.phase = GamePhase::Active;
                }
                Ok(())
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
                Ok(())
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
                Ok(())
            }
            PlayerCommand::DeployTower { kind, at } => self.try_deploy_tower(kind, at).map(drop),
            PlayerCommand::DeployTrap { kind, at } => self.try_deploy_trap(kind, at).map(drop),
            PlayerCommand::UpgradeTower { at, stat } => match self.tower_at(at) {
                Some(tower) => self.try_upgrade(tower, stat).map(drop),
                None => Err(ActionError::UnknownTower),
            },
            PlayerCommand::RemoveAt { at } => self.try_remove_at(at).map(drop),
        };

        if let Err(reason) = result {
            trace!(%reason, "command rejected");
            self.events.push(GameEvent::ActionRejected { reason });
        }
    }

    /// Run all systems in order. Stops early when the game ends.
    fn run_systems(&mut self, dt: f32) {
        // 1. Deploy cooldowns and trap re-arm timers
        systems::cooldowns::run(&mut self.cooldowns, &mut self.traps, dt);
        // 2. Enemy pass: FSM, movement, contact, escapes
        systems::enemy_ai::run(
            &mut self.world,
            dt,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        if self.sweep_towers() {
            return;
        }
        // 3. Seek protection
        systems::enemy_ai::shelter(&mut self.world);
        // 4. Enemy projectiles
        systems::enemy_fire::run(
            &mut self.world,
            dt,
            self.config.layout.width,
            &mut self.despawn_buffer,
        );
        if self.sweep_towers() {
            return;
        }
        // 5. Bombs
        systems::bombs::run(&mut self.world, dt, &mut self.events, &mut self.despawn_buffer);
        if self.sweep_towers() {
            return;
        }
        // 6. Traps
        systems::traps::run(&mut self.world, &mut self.traps, &mut self.events);
        // 7. Tower targeting and firing
        systems::tower_fire::run(&mut self.world, dt, &mut self.events);
        // 8. Tower projectiles
        systems::projectiles::run(
            &mut self.world,
            dt,
            self.config.layout.width,
            &mut self.despawn_buffer,
        );
        // 9. Destroyed enemies: rewards
        systems::cleanup::sweep_enemies(
            &mut self.world,
            &mut self.treasury,
            &mut self.score,
            &mut self.events,
            &mut self.current_boss,
            &mut self.despawn_buffer,
        );
        // 10. Wave spawning and progression
        let victory = systems::wave_spawner::run(
            &mut self.world,
            &mut self.waves,
            WaveContext {
                config: &self.config,
                rng: &mut self.rng,
                treasury: &mut self.treasury,
                score: &mut self.score,
                events: &mut self.events,
                next_spawn_order: &mut self.next_spawn_order,
                current_boss: &mut self.current_boss,
            },
            dt,
        );
        if victory {
            info!(
                gold = self.treasury.gold(),
                kills = self.score.total_kills(),
                "victory"
            );
            self.phase = GamePhase::Victory;
            self.events.push(GameEvent::Victory);
            return;
        }
        // 11. Passive income
        systems::income::run(&mut self.treasury, &mut self.score, &self.config, dt);
    }

    /// Remove destroyed towers. Returns `true` (and ends the game) if the
    /// main tower was among them.
    fn sweep_towers(&mut self) -> bool {
        let main_lost = systems::cleanup::sweep_towers(
            &mut self.world,
            &mut self.build_zones,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        if main_lost {
            info!(
                stage = self.waves.stage,
                wave = self.waves.wave,
                "main tower destroyed, defeat"
            );
            self.main_tower = None;
            self.phase = GamePhase::Defeat;
            self.events.push(GameEvent::Defeat);
        }
        main_lost
    }

    fn snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotSources {
                time: &self.time,
                phase: self.phase,
                config: &self.config,
                treasury: &self.treasury,
                score: &self.score,
                waves: &self.waves,
                cooldowns: &self.cooldowns,
                build_zones: &self.build_zones,
                traps: &self.traps,
                current_boss: self.current_boss,
            },
            events,
        )
    }
}
