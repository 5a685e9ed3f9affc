//! Bond Registry
//!
//! Owns bond records in persistent storage and the global bond counter. Every
//! bond-scoped mutation goes through `require_partner` / `require_active_partner`,
//! which enforce existence, membership, and (for the latter) `Active` status.

use crate::tiered_bond;
use crate::types::{Bond, BondRecord, BondStatus};
use crate::{DataKey, Error};
use soroban_sdk::{Address, Env, Symbol};

#[must_use]
pub fn bond_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::BondCounter)
        .unwrap_or(0)
}

#[must_use]
pub fn load(e: &Env, bond_id: u64) -> Option<BondRecord> {
    e.storage().persistent().get(&DataKey::Bond(bond_id))
}

pub fn save(e: &Env, bond: &BondRecord) {
    e.storage().persistent().set(&DataKey::Bond(bond.id), bond);
}

/// Bond view with the tier derived from the current ladder.
#[must_use]
pub fn get_bond(e: &Env, bond_id: u64) -> Option<Bond> {
    load(e, bond_id).map(|bond| {
        let tier = tiered_bond::current_tier(e, bond.points);
        bond.into_view(tier)
    })
}

/// Creates a bond between `caller` and `partner`. Counter and record are written together.
pub fn create(e: &Env, caller: &Address, partner: &Address) -> Result<u64, Error> {
    if caller == partner {
        return Err(Error::InvalidPartner);
    }
    let bond_id = bond_count(e).checked_add(1).ok_or(Error::Overflow)?;
    let bond = BondRecord {
        id: bond_id,
        partner1: caller.clone(),
        partner2: partner.clone(),
        status: BondStatus::Active,
        points: 0,
        created_at: e.ledger().sequence(),
    };
    save(e, &bond);
    e.storage().instance().set(&DataKey::BondCounter, &bond_id);

    e.events().publish(
        (Symbol::new(e, "bond_created"), bond_id),
        (caller.clone(), partner.clone()),
    );
    Ok(bond_id)
}

/// Loads the bond and checks that `caller` is one of its partners.
///
/// # Errors
/// `NotFound` if the bond does not exist, `Unauthorized` if `caller` is not a partner.
pub fn require_partner(e: &Env, bond_id: u64, caller: &Address) -> Result<BondRecord, Error> {
    let bond = load(e, bond_id).ok_or(Error::NotFound)?;
    if !bond.is_partner(caller) {
        return Err(Error::Unauthorized);
    }
    Ok(bond)
}

/// As `require_partner`, and additionally rejects inactive bonds with `BondInactive`.
pub fn require_active_partner(
    e: &Env,
    bond_id: u64,
    caller: &Address,
) -> Result<BondRecord, Error> {
    let bond = require_partner(e, bond_id, caller)?;
    if !bond.is_active() {
        return Err(Error::BondInactive);
    }
    Ok(bond)
}

/// Moves a bond to `status`. Fails if it is already there.
pub fn set_status(
    e: &Env,
    bond_id: u64,
    caller: &Address,
    status: BondStatus,
) -> Result<(), Error> {
    let mut bond = require_partner(e, bond_id, caller)?;
    if bond.status == status {
        return Err(match status {
            BondStatus::Active => Error::BondActive,
            BondStatus::Inactive => Error::BondInactive,
        });
    }
    bond.status = status;
    save(e, &bond);

    e.events().publish(
        (Symbol::new(e, "bond_status_changed"), bond_id),
        (caller.clone(), status),
    );
    Ok(())
}
