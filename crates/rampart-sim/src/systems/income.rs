//! Passive income: a fixed payout at a fixed interval while the game runs.

use tracing::trace;

use crate::config::SimConfig;
use crate::economy::{ScoreState, Treasury};

pub fn run(treasury: &mut Treasury, score: &mut ScoreState, config: &SimConfig, dt: f32) {
    let payouts = treasury.tick_income(dt, config.passive_income_interval);
    if payouts == 0 {
        return;
    }
    let amount = payouts.saturating_mul(config.passive_income);
    treasury.earn(amount);
    score.record_earnings(amount);
    trace!(amount, gold = treasury.gold(), "passive income");
}
