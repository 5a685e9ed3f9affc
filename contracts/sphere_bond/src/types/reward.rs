//! Reward catalog entries and redemption receipts.

use super::Tier;
use soroban_sdk::{contracttype, Address, String};

/// Global catalog entry. `cost` is always positive.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reward {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub cost: u64,
    pub min_tier: Tier,
    pub created_by: Address,
}

/// Receipt written alongside the debit of a successful redemption.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Redemption {
    pub bond_id: u64,
    pub id: u64,
    pub reward_id: u64,
    pub cost: u64,
    pub redeemed_by: Address,
    pub redeemed_at: u32,
}
