//! Enemy AI for RAMPART.
//!
//! Implements the per-category enemy state machines, the seek-protection
//! adjustment for Basic enemies, and category stat profiles.

pub mod fsm;
pub mod profiles;
pub mod protection;

pub use rampart_core as core;

#[cfg(test)]
mod tests;
