//! Arithmetic Security Tests
//!
//! Verifies that point balances and counters never wrap and that an overflowing
//! credit is rejected before any record is written.

#![cfg(test)]

use crate::test_helpers::{self, text};
use crate::types::Tier;
use crate::Error;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_milestone_overflow_rejected_without_writes() {
    let (e, client, partner1, _partner2, bond_id) = test_helpers::setup_with_bond();
    let admin = Address::generate(&e);
    client.initialize(&admin);
    client.set_point_awards(&admin, &u64::MAX, &u64::MAX);

    client.add_milestone(&partner1, &bond_id, &text(&e, "max"), &text(&e, "d"));
    assert_eq!(client.get_bond(&bond_id).unwrap().points, u64::MAX);

    assert_eq!(
        client.try_add_milestone(&partner1, &bond_id, &text(&e, "over"), &text(&e, "d")),
        Err(Ok(Error::Overflow))
    );
    assert_eq!(client.get_milestone_count(&bond_id), 1);
    assert_eq!(client.get_milestone(&bond_id, &2), None);
    assert_eq!(client.get_bond(&bond_id).unwrap().points, u64::MAX);
}

#[test]
fn test_date_night_overflow_leaves_record_open() {
    let (e, client, partner1, _partner2, bond_id) = test_helpers::setup_with_bond();
    let admin = Address::generate(&e);
    client.initialize(&admin);
    client.set_point_awards(&admin, &u64::MAX, &1);

    test_helpers::complete_date_nights(&e, &client, &partner1, bond_id, 1);
    let height = e.ledger().sequence() + 1;
    let id = client.schedule_date_night(&partner1, &bond_id, &height, &text(&e, "again"));

    assert_eq!(
        client.try_complete_date_night(&partner1, &bond_id, &id),
        Err(Ok(Error::Overflow))
    );
    assert!(!client.get_date_night(&bond_id, &id).unwrap().completed);
}

#[test]
fn test_max_balance_is_gold() {
    let (e, client, partner1, _partner2, bond_id) = test_helpers::setup_with_bond();
    let admin = Address::generate(&e);
    client.initialize(&admin);
    client.set_point_awards(&admin, &1, &u64::MAX);
    test_helpers::add_milestones(&e, &client, &partner1, bond_id, 1);
    assert_eq!(client.get_tier(&bond_id), Some(Tier::Gold));
}

/// A reward costing the whole balance drains it to exactly zero, never below.
#[test]
fn test_redeem_full_max_balance() {
    let (e, client, partner1, _partner2, bond_id) = test_helpers::setup_with_bond();
    let admin = Address::generate(&e);
    client.initialize(&admin);
    client.set_point_awards(&admin, &1, &u64::MAX);
    test_helpers::add_milestones(&e, &client, &partner1, bond_id, 1);

    let creator = Address::generate(&e);
    let everything = client.create_reward(&creator, &text(&e, "All"), &text(&e, "d"), &u64::MAX, &Tier::Gold);
    assert!(client.redeem_reward(&partner1, &bond_id, &everything));
    assert_eq!(client.get_bond(&bond_id).unwrap().points, 0);
    assert_eq!(
        client.try_redeem_reward(&partner1, &bond_id, &everything),
        Err(Ok(Error::InvalidTier))
    );
}
