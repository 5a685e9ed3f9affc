//! Contract configuration: admin, tier ladder, and per-activity point awards.
//!
//! Everything here is optional. Until an admin configures a value the compiled
//! defaults apply, so the ledger works without `initialize`.

use crate::tiered_bond::TierLadder;
use crate::{DataKey, Error};
use soroban_sdk::{contracttype, Address, Env, Symbol};

/// Points credited for each completed date night.
pub const DATE_NIGHT_POINTS: u64 = 50;
/// Points credited for each recorded milestone.
pub const MILESTONE_POINTS: u64 = 100;

/// Points credited per activity type.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointAwards {
    pub date_night: u64,
    pub milestone: u64,
}

impl PointAwards {
    #[must_use]
    pub fn default_awards() -> Self {
        PointAwards {
            date_night: DATE_NIGHT_POINTS,
            milestone: MILESTONE_POINTS,
        }
    }
}

pub fn initialize(e: &Env, admin: &Address) -> Result<(), Error> {
    if e.storage().instance().has(&DataKey::Admin) {
        return Err(Error::AlreadyInitialized);
    }
    e.storage().instance().set(&DataKey::Admin, admin);
    Ok(())
}

/// Checks that `caller` is the stored admin. Auth is enforced by the entry point.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    let admin: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)?;
    if admin != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

#[must_use]
pub fn get_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Admin)
}

#[must_use]
pub fn get_tier_ladder(e: &Env) -> TierLadder {
    e.storage()
        .instance()
        .get(&DataKey::TierLadder)
        .unwrap_or_else(TierLadder::default_ladder)
}

pub fn set_tier_ladder(e: &Env, ladder: &TierLadder) -> Result<(), Error> {
    ladder.validate()?;
    e.storage().instance().set(&DataKey::TierLadder, ladder);
    e.events().publish(
        (Symbol::new(e, "config_updated"), Symbol::new(e, "tier_ladder")),
        ladder.clone(),
    );
    Ok(())
}

#[must_use]
pub fn get_point_awards(e: &Env) -> PointAwards {
    e.storage()
        .instance()
        .get(&DataKey::PointAwards)
        .unwrap_or_else(PointAwards::default_awards)
}

/// A zero award is allowed and turns off earning for that activity.
pub fn set_point_awards(e: &Env, awards: &PointAwards) {
    e.storage().instance().set(&DataKey::PointAwards, awards);
    e.events().publish(
        (Symbol::new(e, "config_updated"), Symbol::new(e, "point_awards")),
        awards.clone(),
    );
}
