//! Redemption Processor
//!
//! Spends a bond's points on a catalog reward. Tier and balance are checked
//! against the same loaded record before any write, so a rejected redemption
//! leaves the bond, the catalog, and the receipt log untouched.

use crate::tiered_bond::current_tier;
use crate::types::Redemption;
use crate::{points, registry, rewards, DataKey, Error};
use soroban_sdk::{Address, Env, Symbol};

#[must_use]
pub fn count(e: &Env, bond_id: u64) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::RedemptionCounter(bond_id))
        .unwrap_or(0)
}

#[must_use]
pub fn get(e: &Env, bond_id: u64, id: u64) -> Option<Redemption> {
    e.storage()
        .persistent()
        .get(&DataKey::Redemption(bond_id, id))
}

pub fn redeem(e: &Env, caller: &Address, bond_id: u64, reward_id: u64) -> Result<bool, Error> {
    let mut bond = registry::load(e, bond_id).ok_or(Error::NotFound)?;
    let reward = rewards::get(e, reward_id).ok_or(Error::NotFound)?;
    if !bond.is_partner(caller) {
        return Err(Error::Unauthorized);
    }
    if !bond.is_active() {
        return Err(Error::BondInactive);
    }
    if current_tier(e, bond.points) < reward.min_tier {
        return Err(Error::InvalidTier);
    }
    if bond.points < reward.cost {
        return Err(Error::InsufficientPoints);
    }
    let receipt_id = count(e, bond_id).checked_add(1).ok_or(Error::Overflow)?;

    points::debit(e, &mut bond, reward.cost)?;
    let receipt = Redemption {
        bond_id,
        id: receipt_id,
        reward_id,
        cost: reward.cost,
        redeemed_by: caller.clone(),
        redeemed_at: e.ledger().sequence(),
    };
    e.storage()
        .persistent()
        .set(&DataKey::Redemption(bond_id, receipt_id), &receipt);
    e.storage()
        .persistent()
        .set(&DataKey::RedemptionCounter(bond_id), &receipt_id);

    e.events().publish(
        (Symbol::new(e, "reward_redeemed"), bond_id),
        (reward_id, receipt_id, caller.clone()),
    );
    Ok(true)
}
