//! Core types and definitions for the RAMPART tower-defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, status effects, commands, events, snapshots,
//! action errors and tuning constants. It has no ECS dependency.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod status;
pub mod types;
