//! Tier Ladder
//!
//! Maps a bond's point balance to a loyalty tier (Bronze, Silver, Gold) using an
//! ascending threshold ladder held as data. The ladder is configurable by the admin;
//! tiers are derived at read time so a ladder change re-tiers every bond at once.
//! Emits tier change events when a credit or debit moves a bond across a threshold.

use crate::types::Tier;
use crate::{config, Error};
use soroban_sdk::{contracttype, Env, Symbol};

/// Default threshold for Silver, in points.
pub const DEFAULT_SILVER_MIN: u64 = 250;
/// Default threshold for Gold, in points.
pub const DEFAULT_GOLD_MIN: u64 = 1_000;

/// Ascending tier thresholds.
/// Bronze: [0, silver_min), Silver: [silver_min, gold_min), Gold: [gold_min, ..)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierLadder {
    pub silver_min: u64,
    pub gold_min: u64,
}

impl TierLadder {
    #[must_use]
    pub fn default_ladder() -> Self {
        TierLadder {
            silver_min: DEFAULT_SILVER_MIN,
            gold_min: DEFAULT_GOLD_MIN,
        }
    }

    /// Thresholds must be strictly ascending and above zero (Bronze owns 0).
    ///
    /// # Errors
    /// `Error::InvalidLadder` otherwise.
    pub fn validate(&self) -> Result<(), Error> {
        if self.silver_min == 0 || self.silver_min >= self.gold_min {
            return Err(Error::InvalidLadder);
        }
        Ok(())
    }

    /// Returns the tier of the highest threshold <= `points`.
    #[must_use]
    pub fn tier_for_points(&self, points: u64) -> Tier {
        let steps = [
            (0, Tier::Bronze),
            (self.silver_min, Tier::Silver),
            (self.gold_min, Tier::Gold),
        ];
        let mut tier = Tier::Bronze;
        for (threshold, name) in steps {
            if points >= threshold {
                tier = name;
            }
        }
        tier
    }
}

/// Tier for `points` under the currently configured ladder.
#[must_use]
pub fn current_tier(e: &Env, points: u64) -> Tier {
    config::get_tier_ladder(e).tier_for_points(points)
}

/// Emits a tier change event if the tier changed.
pub fn emit_tier_change_if_needed(e: &Env, bond_id: u64, old_tier: Tier, new_tier: Tier) {
    if old_tier != new_tier {
        e.events().publish(
            (Symbol::new(e, "tier_changed"), bond_id),
            (old_tier, new_tier),
        );
    }
}
