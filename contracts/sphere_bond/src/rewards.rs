//! Reward Catalog
//!
//! Global, bond-independent list of redeemable rewards. Entries are immutable.
//! Any authenticated account may add one; restricting that is left to the
//! application in front of the contract.

use crate::types::{validate_text, Reward, Tier, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::{DataKey, Error};
use soroban_sdk::{Address, Env, String, Symbol};

#[must_use]
pub fn count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::RewardCounter)
        .unwrap_or(0)
}

#[must_use]
pub fn get(e: &Env, reward_id: u64) -> Option<Reward> {
    e.storage().persistent().get(&DataKey::Reward(reward_id))
}

pub fn create(
    e: &Env,
    caller: &Address,
    title: String,
    description: String,
    cost: u64,
    min_tier: Tier,
) -> Result<u64, Error> {
    if cost == 0 {
        return Err(Error::InvalidCost);
    }
    validate_text(&title, MAX_TITLE_LEN)?;
    validate_text(&description, MAX_DESCRIPTION_LEN)?;

    let id = count(e).checked_add(1).ok_or(Error::Overflow)?;
    let reward = Reward {
        id,
        title,
        description,
        cost,
        min_tier,
        created_by: caller.clone(),
    };
    e.storage().persistent().set(&DataKey::Reward(id), &reward);
    e.storage().instance().set(&DataKey::RewardCounter, &id);

    e.events().publish(
        (Symbol::new(e, "reward_created"), id),
        (caller.clone(), cost, min_tier),
    );
    Ok(id)
}
