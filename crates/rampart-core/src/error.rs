//! Rejected game actions.
//!
//! Every player action is a single synchronous attempt: it either fully
//! succeeds or leaves the game untouched and reports one of these.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
pub enum ActionError {
    #[error("insufficient funds: need {cost}, have {gold}")]
    InsufficientFunds { cost: u32, gold: u32 },
    #[error("deploy on cooldown for another {remaining:.1}s")]
    OnCooldown { remaining: f32 },
    #[error("point is outside every deploy zone")]
    OutsideZone,
    #[error("deploy zone already occupied")]
    ZoneOccupied,
    #[error("the main tower cannot be removed")]
    MainTowerProtected,
    #[error("nothing to remove at that point")]
    NothingToRemove,
    #[error("no tower at that point")]
    UnknownTower,
    #[error("no upgrade slots left on this tower")]
    UpgradeSlotsExhausted,
    #[error("stat already at its maximum level")]
    StatMaxed,
    #[error("game is not running")]
    GameNotActive,
}
