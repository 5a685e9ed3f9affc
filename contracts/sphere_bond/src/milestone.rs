//! Milestone Ledger
//!
//! Immutable per-bond achievements. Recording one credits the configured milestone award.

use crate::types::{validate_text, Milestone, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::{config, points, registry, DataKey, Error};
use soroban_sdk::{Address, Env, String, Symbol};

#[must_use]
pub fn count(e: &Env, bond_id: u64) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::MilestoneCounter(bond_id))
        .unwrap_or(0)
}

#[must_use]
pub fn get(e: &Env, bond_id: u64, id: u64) -> Option<Milestone> {
    e.storage()
        .persistent()
        .get(&DataKey::Milestone(bond_id, id))
}

pub fn add(
    e: &Env,
    caller: &Address,
    bond_id: u64,
    title: String,
    description: String,
) -> Result<u64, Error> {
    let mut bond = registry::require_active_partner(e, bond_id, caller)?;
    validate_text(&title, MAX_TITLE_LEN)?;
    validate_text(&description, MAX_DESCRIPTION_LEN)?;

    let award = config::get_point_awards(e).milestone;
    bond.points.checked_add(award).ok_or(Error::Overflow)?;
    let id = count(e, bond_id).checked_add(1).ok_or(Error::Overflow)?;

    let milestone = Milestone {
        bond_id,
        id,
        title,
        description,
        recorded_by: caller.clone(),
        recorded_at: e.ledger().sequence(),
    };
    e.storage()
        .persistent()
        .set(&DataKey::Milestone(bond_id, id), &milestone);
    e.storage()
        .persistent()
        .set(&DataKey::MilestoneCounter(bond_id), &id);

    e.events().publish(
        (Symbol::new(e, "milestone_added"), bond_id),
        (id, caller.clone()),
    );
    points::credit(e, &mut bond, award)?;
    Ok(id)
}
