//! Date Night Scheduler
//!
//! Partners schedule joint activities at a future ledger sequence and later mark
//! them completed, which credits the configured date-night award. Completion is
//! deliberately not gated on the ledger reaching `scheduled_height`.

use crate::types::{validate_text, DateNight, MAX_DESCRIPTION_LEN};
use crate::{config, points, registry, DataKey, Error};
use soroban_sdk::{Address, Env, String, Symbol};

#[must_use]
pub fn count(e: &Env, bond_id: u64) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::DateNightCounter(bond_id))
        .unwrap_or(0)
}

#[must_use]
pub fn get(e: &Env, bond_id: u64, id: u64) -> Option<DateNight> {
    e.storage()
        .persistent()
        .get(&DataKey::DateNight(bond_id, id))
}

/// Schedules a date night. No id is consumed unless every check passes.
pub fn schedule(
    e: &Env,
    caller: &Address,
    bond_id: u64,
    scheduled_height: u32,
    description: String,
) -> Result<u64, Error> {
    registry::require_active_partner(e, bond_id, caller)?;
    if scheduled_height <= e.ledger().sequence() {
        return Err(Error::InvalidSchedule);
    }
    validate_text(&description, MAX_DESCRIPTION_LEN)?;

    let id = count(e, bond_id).checked_add(1).ok_or(Error::Overflow)?;
    let date_night = DateNight {
        bond_id,
        id,
        scheduled_height,
        description,
        completed: false,
        completed_at: None,
    };
    e.storage()
        .persistent()
        .set(&DataKey::DateNight(bond_id, id), &date_night);
    e.storage()
        .persistent()
        .set(&DataKey::DateNightCounter(bond_id), &id);

    e.events().publish(
        (Symbol::new(e, "date_night_scheduled"), bond_id),
        (id, scheduled_height),
    );
    Ok(id)
}

/// Marks a date night completed and credits the bond.
pub fn complete(e: &Env, caller: &Address, bond_id: u64, id: u64) -> Result<bool, Error> {
    let mut bond = registry::require_active_partner(e, bond_id, caller)?;
    let mut date_night = get(e, bond_id, id).ok_or(Error::NotFound)?;
    if date_night.completed {
        return Err(Error::AlreadyCompleted);
    }
    let award = config::get_point_awards(e).date_night;
    // Overflow must surface before the record flips.
    bond.points.checked_add(award).ok_or(Error::Overflow)?;

    date_night.completed = true;
    date_night.completed_at = Some(e.ledger().sequence());
    e.storage()
        .persistent()
        .set(&DataKey::DateNight(bond_id, id), &date_night);

    e.events().publish(
        (Symbol::new(e, "date_night_completed"), bond_id),
        (id, caller.clone()),
    );
    points::credit(e, &mut bond, award)?;
    Ok(true)
}
