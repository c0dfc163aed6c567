//! Simulation configuration: field layout, campaign tables and economy knobs.
//!
//! `SimConfig::default()` is the stock campaign. Overrides can be loaded
//! from JSON; missing fields fall back to the defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rampart_core::constants::*;
use rampart_core::enums::EnemyCategory;
use rampart_core::types::Rect;

use crate::scenario;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("campaign has no stages")]
    NoStages,
    #[error("stage {stage} has no waves")]
    NoWaves { stage: u32 },
    #[error("stage {stage} has no spawnable category weights")]
    EmptyWeights { stage: u32 },
    #[error("stage {stage} gives the boss a random weight; bosses are only forced on the final wave")]
    BossWeight { stage: u32 },
    #[error("layout has no spawn lanes")]
    NoLanes,
    #[error("wave quota must be positive")]
    ZeroQuota,
    #[error("{field} must be a finite number of seconds, at least 0.01, got {value}")]
    BadInterval { field: &'static str, value: f32 },
}

/// Shortest timer interval a config may set, in seconds.
pub const MIN_INTERVAL: f32 = 0.01;

fn check_interval(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= MIN_INTERVAL {
        Ok(())
    } else {
        Err(ConfigError::BadInterval { field, value })
    }
}

/// Spawn weights and wave count for one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTable {
    /// Category weights indexed by `EnemyCategory::index`.
    pub weights: [u32; 5],
    pub waves: u32,
}

impl StageTable {
    pub fn weight(&self, category: EnemyCategory) -> u32 {
        self.weights[category.index()]
    }
}

/// Fixed geometry of the play field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub width: f32,
    pub height: f32,
    /// Center of the main structure.
    pub main_tower: Vec2,
    /// Lane center lines enemies spawn on.
    pub lanes: Vec<f32>,
    pub build_zones: Vec<Rect>,
    pub trap_zones: Vec<Rect>,
}

impl Default for FieldLayout {
    fn default() -> Self {
        let lanes = vec![200.0, 360.0, 520.0];
        let mut build_zones = Vec::new();
        let mut trap_zones = Vec::new();
        for &y in &lanes {
            for x in [240.0, 360.0, 480.0] {
                build_zones.push(Rect::from_center(Vec2::new(x, y), Vec2::new(96.0, 120.0)));
            }
            for x in [640.0, 780.0] {
                trap_zones.push(Rect::from_center(Vec2::new(x, y), Vec2::new(90.0, 60.0)));
            }
        }
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            main_tower: Vec2::new(80.0, 360.0),
            lanes,
            build_zones,
            trap_zones,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for spawn ordering. Same seed = same spawns.
    pub seed: u64,
    pub starting_gold: u32,
    pub passive_income: u32,
    pub passive_income_interval: f32,
    pub wave_bonus: u32,
    pub spawn_interval: f32,
    pub transition_delay: f32,
    pub base_quota: u32,
    pub quota_growth: u32,
    pub layout: FieldLayout,
    pub stages: Vec<StageTable>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_gold: STARTING_GOLD,
            passive_income: PASSIVE_INCOME,
            passive_income_interval: PASSIVE_INCOME_INTERVAL,
            wave_bonus: WAVE_BONUS,
            spawn_interval: WAVE_SPAWN_INTERVAL,
            transition_delay: WAVE_TRANSITION_DELAY,
            base_quota: BASE_WAVE_QUOTA,
            quota_growth: WAVE_QUOTA_GROWTH,
            layout: FieldLayout::default(),
            stages: scenario::default_campaign(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::NoStages);
        }
        for (i, stage) in self.stages.iter().enumerate() {
            let number = i as u32 + 1;
            if stage.waves == 0 {
                return Err(ConfigError::NoWaves { stage: number });
            }
            if stage.weight(EnemyCategory::Boss) != 0 {
                return Err(ConfigError::BossWeight { stage: number });
            }
            if stage.weights.iter().all(|&w| w == 0) {
                return Err(ConfigError::EmptyWeights { stage: number });
            }
        }
        if self.layout.lanes.is_empty() {
            return Err(ConfigError::NoLanes);
        }
        if self.base_quota == 0 {
            return Err(ConfigError::ZeroQuota);
        }
        check_interval("passive_income_interval", self.passive_income_interval)?;
        check_interval("spawn_interval", self.spawn_interval)?;
        check_interval("transition_delay", self.transition_delay)?;
        Ok(())
    }

    pub fn stage_count(&self) -> u32 {
        self.stages.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = SimConfig::from_json(r#"{ "seed": 7, "starting_gold": 10 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_gold, 10);
        assert_eq!(config.stages, scenario::default_campaign());
    }

    #[test]
    fn boss_weight_is_rejected() {
        let json = r#"{ "stages": [ { "weights": [1, 0, 0, 0, 5], "waves": 2 } ] }"#;
        assert!(matches!(
            SimConfig::from_json(json),
            Err(ConfigError::BossWeight { stage: 1 })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn degenerate_intervals_are_rejected() {
        for json in [
            r#"{ "passive_income_interval": 1e-9 }"#,
            r#"{ "spawn_interval": 0.0 }"#,
            r#"{ "transition_delay": -1.0 }"#,
        ] {
            assert!(
                matches!(
                    SimConfig::from_json(json),
                    Err(ConfigError::BadInterval { .. })
                ),
                "{json}"
            );
        }
        let config = SimConfig {
            passive_income_interval: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadInterval {
                field: "passive_income_interval",
                ..
            })
        ));
    }

    #[test]
    fn empty_campaign_is_rejected() {
        let json = r#"{ "stages": [] }"#;
        assert!(matches!(
            SimConfig::from_json(json),
            Err(ConfigError::NoStages)
        ));
    }
}
