//! Points Ledger
//!
//! The only writer of `BondRecord::points`. Credits come from completed date nights
//! and recorded milestones; debits come from redemptions. Both persist the bond and
//! emit a points event, followed by a tier change event when a threshold is crossed.

use crate::registry;
use crate::tiered_bond::{current_tier, emit_tier_change_if_needed};
use crate::types::BondRecord;
use crate::Error;
use soroban_sdk::{Env, Symbol};

/// Adds `amount` to the bond's balance and saves it.
///
/// # Errors
/// `Error::Overflow` if the balance would exceed `u64::MAX`; nothing is written.
pub fn credit(e: &Env, bond: &mut BondRecord, amount: u64) -> Result<(), Error> {
    let old_tier = current_tier(e, bond.points);
    bond.points = bond.points.checked_add(amount).ok_or(Error::Overflow)?;
    registry::save(e, bond);

    e.events().publish(
        (Symbol::new(e, "points_credited"), bond.id),
        (amount, bond.points),
    );
    emit_tier_change_if_needed(e, bond.id, old_tier, current_tier(e, bond.points));
    Ok(())
}

/// Subtracts `amount` from the bond's balance and saves it.
///
/// # Errors
/// `Error::InsufficientPoints` if `amount` exceeds the balance; nothing is written.
pub fn debit(e: &Env, bond: &mut BondRecord, amount: u64) -> Result<(), Error> {
    let old_tier = current_tier(e, bond.points);
    bond.points = bond
        .points
        .checked_sub(amount)
        .ok_or(Error::InsufficientPoints)?;
    registry::save(e, bond);

    e.events().publish(
        (Symbol::new(e, "points_debited"), bond.id),
        (amount, bond.points),
    );
    emit_tier_change_if_needed(e, bond.id, old_tier, current_tier(e, bond.points));
    Ok(())
}
