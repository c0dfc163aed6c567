//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs the combat systems in a fixed order once
//! per frame, and produces GameStateSnapshots for presentation.

pub mod config;
pub mod economy;
pub mod engine;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::{EventSink, SimulationEngine};
pub use rampart_core as core;
