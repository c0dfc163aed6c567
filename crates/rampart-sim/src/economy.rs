//! Gold and score bookkeeping.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use rampart_core::enums::EnemyCategory;
use rampart_core::error::ActionError;
use rampart_core::state::ScoreView;

/// The player's gold purse plus the passive income clock.
#[derive(Debug, Clone, Default)]
pub struct Treasury {
    gold: u32,
    /// Seconds accumulated toward the next passive payout.
    income_timer: f32,
}

impl Treasury {
    pub fn new(gold: u32) -> Self {
        Self {
            gold,
            income_timer: 0.0,
        }
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Fails without touching the purse when `cost` exceeds the balance.
    pub fn check(&self, cost: u32) -> Result<(), ActionError> {
        if cost > self.gold {
            return Err(ActionError::InsufficientFunds {
                cost,
                gold: self.gold,
            });
        }
        Ok(())
    }

    pub fn spend(&mut self, cost: u32) -> Result<(), ActionError> {
        self.check(cost)?;
        self.gold -= cost;
        Ok(())
    }

    pub fn earn(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Advance the income clock; returns how many payouts are due.
    pub fn tick_income(&mut self, delta: f32, interval: f32) -> u32 {
        if interval <= 0.0 {
            return 0;
        }
        self.income_timer += delta;
        if self.income_timer < interval {
            return 0;
        }
        let payouts = (self.income_timer / interval).floor();
        self.income_timer = (self.income_timer - payouts * interval).max(0.0);
        payouts.min(u32::MAX as f32) as u32
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    /// Kills indexed by `EnemyCategory::index`.
    pub kills: [u32; 5],
    pub escaped: u32,
    pub towers_lost: u32,
    /// Gold from kills, wave bonuses and passive income. Refunds excluded.
    pub gold_earned: u32,
}

impl ScoreState {
    pub fn record_kill(&mut self, category: EnemyCategory, reward: u32) {
        self.kills[category.index()] += 1;
        self.record_earnings(reward);
    }

    /// Count gold toward `gold_earned`, saturating.
    pub fn record_earnings(&mut self, amount: u32) {
        self.gold_earned = self.gold_earned.saturating_add(amount);
    }

    pub fn total_kills(&self) -> u32 {
        self.kills.iter().sum()
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            kills: self.kills,
            escaped: self.escaped,
            towers_lost: self.towers_lost,
            gold_earned: self.gold_earned,
        }
    }
}
