//! # Sphere Bond Contract
//!
//! A shared ledger between exactly two partners. Completed date nights and
//! recorded milestones earn points, points determine a loyalty tier, and points
//! can be spent on catalog rewards gated by tier.
//!
//! Callers are passed explicitly and authenticated with `require_auth`; the
//! current height is the ledger sequence number. Every mutating entry point
//! validates in full before its first write and returns a typed `Error`.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String};

pub mod config;
pub mod date_night;
pub mod milestone;
pub mod points;
pub mod redemption;
pub mod registry;
pub mod rewards;
pub mod tiered_bond;
pub mod types;

use config::PointAwards;
use tiered_bond::TierLadder;
use types::{Bond, BondStatus, DateNight, Milestone, Redemption, Reward, Tier};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    NotFound = 1,
    Unauthorized = 2,
    InvalidPartner = 3,
    InvalidSchedule = 4,
    AlreadyCompleted = 5,
    InsufficientPoints = 6,
    InvalidTier = 7,
    InvalidCost = 8,
    TextTooLong = 9,
    BondInactive = 10,
    BondActive = 11,
    NotInitialized = 12,
    AlreadyInitialized = 13,
    InvalidLadder = 14,
    Overflow = 15,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    TierLadder,
    PointAwards,
    /// Last issued bond id.
    BondCounter,
    /// Last issued reward id.
    RewardCounter,
    Bond(u64),
    /// (bond_id, date_night_id)
    DateNight(u64, u64),
    DateNightCounter(u64),
    /// (bond_id, milestone_id)
    Milestone(u64, u64),
    MilestoneCounter(u64),
    Reward(u64),
    /// (bond_id, redemption_id)
    Redemption(u64, u64),
    RedemptionCounter(u64),
}

#[contract]
pub struct SphereBond;

#[contractimpl]
impl SphereBond {
    // ── Configuration ──────────────────────────────────────────────────────

    /// Store the admin allowed to tune the tier ladder and point awards.
    pub fn initialize(e: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        config::initialize(&e, &admin)
    }

    pub fn get_admin(e: Env) -> Option<Address> {
        config::get_admin(&e)
    }

    /// Replace the tier thresholds. Existing bonds are re-tiered on their next read.
    pub fn set_tier_ladder(
        e: Env,
        admin: Address,
        silver_min: u64,
        gold_min: u64,
    ) -> Result<(), Error> {
        admin.require_auth();
        config::require_admin(&e, &admin)?;
        config::set_tier_ladder(
            &e,
            &TierLadder {
                silver_min,
                gold_min,
            },
        )
    }

    pub fn get_tier_ladder(e: Env) -> TierLadder {
        config::get_tier_ladder(&e)
    }

    pub fn set_point_awards(
        e: Env,
        admin: Address,
        date_night_points: u64,
        milestone_points: u64,
    ) -> Result<(), Error> {
        admin.require_auth();
        config::require_admin(&e, &admin)?;
        config::set_point_awards(
            &e,
            &PointAwards {
                date_night: date_night_points,
                milestone: milestone_points,
            },
        );
        Ok(())
    }

    pub fn get_point_awards(e: Env) -> PointAwards {
        config::get_point_awards(&e)
    }

    // ── Bonds ──────────────────────────────────────────────────────────────

    /// Create a bond between the caller and `partner`. Returns the new bond id.
    pub fn create_bond(e: Env, caller: Address, partner: Address) -> Result<u64, Error> {
        caller.require_auth();
        registry::create(&e, &caller, &partner)
    }

    pub fn get_bond(e: Env, bond_id: u64) -> Option<Bond> {
        registry::get_bond(&e, bond_id)
    }

    pub fn get_bond_count(e: Env) -> u64 {
        registry::bond_count(&e)
    }

    pub fn get_tier(e: Env, bond_id: u64) -> Option<Tier> {
        registry::get_bond(&e, bond_id).map(|bond| bond.tier)
    }

    pub fn is_partner(e: Env, bond_id: u64, account: Address) -> bool {
        registry::load(&e, bond_id).is_some_and(|bond| bond.is_partner(&account))
    }

    /// Suspend a bond. While inactive it earns, schedules and spends nothing.
    pub fn deactivate_bond(e: Env, caller: Address, bond_id: u64) -> Result<(), Error> {
        caller.require_auth();
        registry::set_status(&e, bond_id, &caller, BondStatus::Inactive)
    }

    pub fn reactivate_bond(e: Env, caller: Address, bond_id: u64) -> Result<(), Error> {
        caller.require_auth();
        registry::set_status(&e, bond_id, &caller, BondStatus::Active)
    }

    // ── Date nights ────────────────────────────────────────────────────────

    /// Schedule a date night at a ledger sequence strictly after the current one.
    pub fn schedule_date_night(
        e: Env,
        caller: Address,
        bond_id: u64,
        scheduled_height: u32,
        description: String,
    ) -> Result<u64, Error> {
        caller.require_auth();
        date_night::schedule(&e, &caller, bond_id, scheduled_height, description)
    }

    /// Mark a date night completed and credit the bond.
    pub fn complete_date_night(
        e: Env,
        caller: Address,
        bond_id: u64,
        date_night_id: u64,
    ) -> Result<bool, Error> {
        caller.require_auth();
        date_night::complete(&e, &caller, bond_id, date_night_id)
    }

    pub fn get_date_night(e: Env, bond_id: u64, date_night_id: u64) -> Option<DateNight> {
        date_night::get(&e, bond_id, date_night_id)
    }

    pub fn get_date_night_count(e: Env, bond_id: u64) -> u64 {
        date_night::count(&e, bond_id)
    }

    // ── Milestones ─────────────────────────────────────────────────────────

    pub fn add_milestone(
        e: Env,
        caller: Address,
        bond_id: u64,
        title: String,
        description: String,
    ) -> Result<u64, Error> {
        caller.require_auth();
        milestone::add(&e, &caller, bond_id, title, description)
    }

    pub fn get_milestone(e: Env, bond_id: u64, milestone_id: u64) -> Option<Milestone> {
        milestone::get(&e, bond_id, milestone_id)
    }

    pub fn get_milestone_count(e: Env, bond_id: u64) -> u64 {
        milestone::count(&e, bond_id)
    }

    // ── Rewards ────────────────────────────────────────────────────────────

    /// Add a reward to the global catalog.
    pub fn create_reward(
        e: Env,
        caller: Address,
        title: String,
        description: String,
        cost: u64,
        min_tier: Tier,
    ) -> Result<u64, Error> {
        caller.require_auth();
        rewards::create(&e, &caller, title, description, cost, min_tier)
    }

    pub fn get_reward(e: Env, reward_id: u64) -> Option<Reward> {
        rewards::get(&e, reward_id)
    }

    pub fn get_reward_count(e: Env) -> u64 {
        rewards::count(&e)
    }

    /// Spend the reward's cost from the bond. Returns `true` on success.
    pub fn redeem_reward(
        e: Env,
        caller: Address,
        bond_id: u64,
        reward_id: u64,
    ) -> Result<bool, Error> {
        caller.require_auth();
        redemption::redeem(&e, &caller, bond_id, reward_id)
    }

    pub fn get_redemption(e: Env, bond_id: u64, redemption_id: u64) -> Option<Redemption> {
        redemption::get(&e, bond_id, redemption_id)
    }

    pub fn get_redemption_count(e: Env, bond_id: u64) -> u64 {
        redemption::count(&e, bond_id)
    }
}

#[cfg(test)]
mod test_helpers;






#[cfg(test)]
mod test_rewards;
