//! Resource Ledger
//!
//! Tracks the player's health and coins and applies the resource effects carried by choices.
use std::cmp;

use log::info;

/// Possible life states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Health and coin balances for the current playthrough.
///
/// Health never exceeds `max_health` and never drops below zero; coins never go negative.
/// Reaching zero health is not an error here: it is how the ledger reports death.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLedger {
    max_health: u32,
    health: u32,
    coins: u32,
}
impl ResourceLedger {
    /// Create a ledger at full health with the given purse.
    pub fn new(max_health: u32, coins: u32) -> ResourceLedger {
        ResourceLedger {
            max_health,
            health: max_health,
            coins,
        }
    }

    /// Create a ledger with explicit health, clamped to `max_health`.
    pub fn with_health(max_health: u32, health: u32, coins: u32) -> ResourceLedger {
        ResourceLedger {
            max_health,
            health: cmp::min(health, max_health),
            coins,
        }
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Return whether the player is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.health > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Returns `true` if the purse covers `cost`.
    pub fn can_afford(&self, cost: u32) -> bool {
        cost <= self.coins
    }

    /// Apply a choice's resource effects.
    ///
    /// Coins become `max(0, coins + coins_delta - entry_cost)`. Health becomes
    /// `health + health_delta`, saturating at `max_health` above and zero below.
    pub fn apply_delta(&mut self, health_delta: i32, coins_delta: i32, entry_cost: u32) {
        let purse = i64::from(self.coins) + i64::from(coins_delta) - i64::from(entry_cost);
        let coins = u32::try_from(purse.max(0)).unwrap_or(u32::MAX);
        let health = cmp::min(self.max_health, self.health.saturating_add_signed(health_delta));

        if coins != self.coins || health != self.health {
            info!(
                "ledger: health {} -> {health}, coins {} -> {coins} (delta hp {health_delta:+}, coins {coins_delta:+}, cost {entry_cost})",
                self.health, self.coins
            );
        }
        self.coins = coins;
        self.health = health;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_deducted_from_coins() {
        let mut ledger = ResourceLedger::new(10, 5);
        ledger.apply_delta(0, 0, 1);
        assert_eq!(ledger.coins(), 4);
        assert_eq!(ledger.health(), 10);
    }

    #[test]
    fn coins_floor_at_zero() {
        let mut ledger = ResourceLedger::new(10, 5);
        ledger.apply_delta(-3, -5, 0);
        assert_eq!(ledger.coins(), 0);
        assert_eq!(ledger.health(), 7);

        ledger.apply_delta(0, -100, 7);
        assert_eq!(ledger.coins(), 0);
    }

    #[test]
    fn gain_and_cost_are_netted_before_clamping() {
        let mut ledger = ResourceLedger::new(10, 2);
        ledger.apply_delta(0, 3, 4);
        assert_eq!(ledger.coins(), 1);
    }

    #[test]
    fn healing_saturates_at_max_health() {
        let mut ledger = ResourceLedger::with_health(10, 6, 0);
        ledger.apply_delta(3, 0, 0);
        assert_eq!(ledger.health(), 9);

        ledger.apply_delta(10, 0, 0);
        assert_eq!(ledger.health(), 10);
    }

    #[test]
    fn lethal_damage_stops_at_zero_and_reports_death() {
        let mut ledger = ResourceLedger::with_health(10, 4, 3);
        assert_eq!(ledger.life_state(), LifeState::Alive);

        ledger.apply_delta(-7, 0, 0);
        assert_eq!(ledger.health(), 0);
        assert_eq!(ledger.life_state(), LifeState::Dead);
    }

    #[test]
    fn balances_stay_in_range_for_extreme_deltas() {
        let deltas = [i32::MIN, -1_000, -11, -10, -1, 0, 1, 10, 11, 1_000, i32::MAX];
        let costs = [0, 1, 5, 1_000, u32::MAX];
        for &hp in &deltas {
            for &gold in &deltas {
                for &cost in &costs {
                    let mut ledger = ResourceLedger::new(10, 5);
                    ledger.apply_delta(hp, gold, cost);
                    assert!(ledger.health() <= ledger.max_health(), "hp {hp} gold {gold} cost {cost}");
                    if cost > 0 && gold <= 0 {
                        assert!(ledger.coins() < 5, "gold {gold} cost {cost}");
                    }
                }
            }
        }
    }

    #[test]
    fn can_afford_compares_against_purse() {
        let ledger = ResourceLedger::new(10, 3);
        assert!(ledger.can_afford(0));
        assert!(ledger.can_afford(3));
        assert!(!ledger.can_afford(4));
    }

    #[test]
    fn explicit_health_is_clamped_to_max() {
        let ledger = ResourceLedger::with_health(10, 25, 0);
        assert_eq!(ledger.health(), 10);
    }
}
